//! Error types for the reference viewer.
//!
//! This module defines the centralized error type [`ViewerError`] and a type alias
//! [`Result`] used throughout the crate. Only document loading failures are allowed
//! to stop the viewer; every other variant is caught by its caller and degraded to
//! a default.

use thiserror::Error;

/// The main error type for viewer operations.
///
/// # Examples
///
/// ```
/// use refdoc::domain::ViewerError;
///
/// fn load() -> Result<(), ViewerError> {
///     Err(ViewerError::EmptyDocument)
/// }
///
/// assert!(load().unwrap_err().is_fatal());
/// ```
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The loaded document contains no chapters.
    ///
    /// Raised once at startup. The viewer cannot operate without content, so
    /// this is reported to the caller instead of showing an empty UI.
    #[error("document contains no chapters")]
    EmptyDocument,

    /// The document source could not be parsed.
    #[error("Document error: {0}")]
    Document(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Durable storage could not be read or written.
    ///
    /// Never surfaced to the user: the bookmark and preference stores fall back
    /// to their defaults and keep going.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl ViewerError {
    /// Returns `true` for errors that must halt initialization.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::EmptyDocument | Self::Document(_) | Self::Io(_))
    }
}

/// A specialized `Result` type for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
