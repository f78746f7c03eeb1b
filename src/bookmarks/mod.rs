//! Bookmark persistence.

pub mod store;

pub use store::BookmarkStore;
