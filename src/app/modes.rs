//! Input and view mode state types for the application.
//!
//! These enums decide which keybindings are active and what the body of the
//! screen shows.
//!
//! # State Machine
//!
//! The application operates in one of two input modes:
//! - **Normal**: navigation and commands
//! - **Search**: editing the query or moving through its results
//!
//! View modes pick the body:
//! - **Welcome**: chapter list, no cursor
//! - **Reading**: the section under the cursor
//! - **`SearchResults`**: results of the last submitted query
//! - **Bookmarks**: saved sections
//!
//! # Example
//!
//! ```rust
//! use refdoc::app::modes::{InputMode, SearchFocus, ViewMode};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! let view_mode = ViewMode::Welcome;
//! assert_ne!(input_mode, InputMode::Normal);
//! assert_eq!(view_mode, ViewMode::default());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// The query is being edited. Enter submits it.
    Typing,

    /// Results are shown and j/k move through them. `/` edits the query again.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// Search mode with its focus state. The search bar is visible.
    Search(SearchFocus),
}

/// What the body of the screen shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Chapter list. The cursor is unset.
    #[default]
    Welcome,

    /// Section text for the current cursor.
    Reading,

    /// Results of the last submitted query. The cursor is unset.
    SearchResults,

    /// The bookmark list.
    Bookmarks,
}
