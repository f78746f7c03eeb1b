//! Storage layer for bookmarks and preferences.
//!
//! This module provides the key-value abstraction both stores persist through,
//! its backends, and the preference store. The bookmark store lives in
//! [`crate::bookmarks`].
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait
//! - `json`: one JSON file per key with atomic writes
//! - `memory`: in-memory and disabled backends
//! - `preferences`: [`PreferenceStore`]

pub mod backend;
pub mod json;
pub mod memory;
pub mod preferences;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::{DisabledStore, MemoryStore};
pub use preferences::PreferenceStore;

/// Storage key of the bookmark list.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Storage key of the display preferences.
pub const PREFERENCES_KEY: &str = "preferences";
