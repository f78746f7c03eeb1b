//! Render events emitted by the navigation operations.
//!
//! Every state-changing operation on [`AppState`](crate::app::AppState) returns
//! the events it produced, in order. The plugin runtime paints from the view
//! model and only acts on [`Action::CloseFocus`] directly; the other events
//! describe what changed so that any front end can subscribe to them.
//!
//! # Example
//!
//! ```rust
//! use refdoc::app::Action;
//!
//! let actions = vec![
//!     Action::ChapterSelected { chapter: 2 },
//!     Action::BookmarkStateChanged { chapter: 2, section: 0, bookmarked: false },
//! ];
//! assert!(actions.iter().all(|a| !matches!(a, Action::CloseFocus)));
//! ```

use crate::content::Block;
use crate::domain::{Bookmark, Preferences};
use crate::search::SearchResult;

/// Events describing a state change, produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The cursor was cleared and the chapter list is shown.
    WelcomeShown,

    /// A chapter became current. Always followed by [`Action::SectionShown`].
    ChapterSelected {
        chapter: usize,
    },

    /// A section became current.
    SectionShown {
        chapter: usize,
        section: usize,
        /// Formatted section content.
        blocks: Vec<Block>,
    },

    /// A query was run. `results` are in document order and may be empty.
    SearchResultsReady {
        query: String,
        results: Vec<SearchResult>,
    },

    /// Bookmark membership of the current section, after a cursor move or a toggle.
    BookmarkStateChanged {
        chapter: usize,
        section: usize,
        bookmarked: bool,
    },

    /// The bookmark list, in insertion order.
    BookmarkListChanged {
        bookmarks: Vec<Bookmark>,
    },

    /// Display preferences changed.
    PreferencesChanged {
        preferences: Preferences,
    },

    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,
}
