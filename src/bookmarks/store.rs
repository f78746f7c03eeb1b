//! The persisted bookmark list.
//!
//! Bookmarks are kept in insertion order and written through to storage on
//! every toggle. Storage is best-effort: a failed write is logged and the
//! in-memory list stays authoritative for the rest of the session.

use crate::domain::{bookmark_id, Bookmark};
use crate::storage::{KeyValueStore, BOOKMARKS_KEY};
use std::collections::HashSet;

/// Ordered set of bookmarks, unique by id.
pub struct BookmarkStore {
    backend: Box<dyn KeyValueStore>,
    bookmarks: Vec<Bookmark>,
}

impl std::fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("bookmarks", &self.bookmarks)
            .finish_non_exhaustive()
    }
}

impl BookmarkStore {
    /// Loads the bookmark list from `backend`.
    ///
    /// Unavailable storage, a missing key or malformed JSON yield an empty list.
    /// Duplicate ids in the stored list are collapsed, keeping the first.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let _span = tracing::debug_span!("bookmarks_load").entered();

        let stored: Vec<Bookmark> = match backend.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored bookmarks are malformed, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "bookmarks unavailable, starting empty");
                Vec::new()
            }
        };

        let mut seen = HashSet::with_capacity(stored.len());
        let bookmarks: Vec<Bookmark> = stored
            .into_iter()
            .filter(|bookmark| seen.insert(bookmark.id.clone()))
            .collect();

        tracing::debug!(count = bookmarks.len(), "bookmarks loaded");
        Self { backend, bookmarks }
    }

    /// Adds or removes the bookmark for a section.
    ///
    /// Returns the new membership state: `true` if the section is now
    /// bookmarked. `title` is only used when a bookmark is created.
    pub fn toggle(&mut self, chapter: usize, section: usize, title: &str) -> bool {
        let id = bookmark_id(chapter, section);
        let _span = tracing::debug_span!("bookmark_toggle", id = %id).entered();

        let bookmarked = if let Some(pos) = self.bookmarks.iter().position(|b| b.id == id) {
            self.bookmarks.remove(pos);
            false
        } else {
            self.bookmarks.push(Bookmark::new(chapter, section, title));
            true
        };

        tracing::debug!(bookmarked, count = self.bookmarks.len(), "bookmark toggled");
        self.persist();
        bookmarked
    }

    #[must_use]
    pub fn has(&self, chapter: usize, section: usize) -> bool {
        let id = bookmark_id(chapter, section);
        self.bookmarks.iter().any(|b| b.id == id)
    }

    /// Bookmarks in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Hands back the backend, e.g. to reload from it.
    #[must_use]
    pub fn into_backend(self) -> Box<dyn KeyValueStore> {
        self.backend
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.bookmarks) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize bookmarks");
                return;
            }
        };
        if let Err(e) = self.backend.set(BOOKMARKS_KEY, &json) {
            tracing::warn!(error = %e, "failed to persist bookmarks");
        }
    }
}
