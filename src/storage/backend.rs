//! Storage backend abstraction.
//!
//! This module defines the [`KeyValueStore`] trait that the bookmark and
//! preference stores persist through. Values are JSON documents kept as
//! strings; the stores own their (de)serialization so a backend only moves
//! text around.
//!
//! # Failure Contract
//!
//! Every call may fail. Callers never surface these failures to the user:
//! reads degrade to defaults and writes are best-effort.

use crate::domain::error::Result;

/// Durable string storage keyed by short names.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one file per key, atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): process memory, for tests
/// - [`DisabledStore`](crate::storage::DisabledStore): storage unavailable, every call fails
///
/// # Examples
///
/// ```
/// use refdoc::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("bookmarks", "[]")?;
/// assert_eq!(store.get("bookmarks")?.as_deref(), Some("[]"));
/// # Ok::<(), refdoc::domain::ViewerError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Storage`](crate::domain::ViewerError::Storage) or
    /// [`ViewerError::Io`](crate::domain::ViewerError::Io) if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
