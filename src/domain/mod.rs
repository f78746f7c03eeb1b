//! Domain layer for the reference viewer.
//!
//! Core types with no dependency on Zellij or on storage backends.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`document`]: The chapter/section tree
//! - [`bookmark`]: Saved section references
//! - [`preferences`]: Display preferences
//!
//! # Examples
//!
//! ```
//! use refdoc::domain::{Document, Result};
//!
//! fn load() -> Result<Document> {
//!     Document::from_json(r#"[{"title": "총칙", "sections": [{"title": "목적", "content": "..."}]}]"#)
//! }
//!
//! assert_eq!(load().unwrap().total_sections(), 1);
//! ```

pub mod bookmark;
pub mod document;
pub mod error;
pub mod preferences;

pub use bookmark::{bookmark_id, Bookmark};
pub use document::{Chapter, Document, Section};
pub use error::{Result, ViewerError};
pub use preferences::{FontSize, Preferences};
