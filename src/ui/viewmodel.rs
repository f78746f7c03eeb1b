//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: lists are already windowed
//! to the pane height, section text is already wrapped to the pane width.
//!
//! # Example
//!
//! ```rust
//! use refdoc::ui::viewmodel::{Body, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " 북마크 ".to_string(), status: "light · medium".to_string() },
//!     search_bar: None,
//!     body: Body::Empty(EmptyState {
//!         message: "저장된 북마크가 없습니다".to_string(),
//!         subtitle: String::new(),
//!     }),
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert!(vm.search_bar.is_none());
//! ```

use crate::search::Snippet;
use crate::ui::layout::ContentLine;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Present while the search bar is open.
    pub search_bar: Option<SearchBarInfo>,

    /// Main area between the chrome rows.
    pub body: Body,

    pub footer: FooterInfo,
}

/// What fills the main area.
#[derive(Debug, Clone)]
pub enum Body {
    /// Chapter list, search results or bookmarks.
    List(ListView),
    /// Text of the current section.
    Reading(ReadingView),
    /// Centered message when a list has nothing to show.
    Empty(EmptyState),
}

/// A selectable list, already cut down to the visible window.
#[derive(Debug, Clone)]
pub struct ListView {
    /// Summary line above the list.
    pub caption: String,
    pub items: Vec<ListItem>,
    /// Selection index within `items`.
    pub selected_index: usize,
    /// Screen rows used by each item: 1, or 2 when a snippet line follows.
    pub rows_per_item: usize,
}

/// One list row.
#[derive(Debug, Clone)]
pub struct ListItem {
    pub icon: Option<String>,
    pub label: String,
    /// Secondary text shown dimmed after the label.
    pub detail: Option<String>,
    /// Short right-aligned text, e.g. a section count.
    pub badge: Option<String>,
    /// Search context shown on the row below the label.
    pub snippet: Option<Snippet>,
    pub is_selected: bool,
    /// Whether the entry is bookmarked.
    pub is_marked: bool,
}

/// Visible part of the current section.
#[derive(Debug, Clone)]
pub struct ReadingView {
    /// Lines in the viewport, after scrolling.
    pub lines: Vec<ContentLine>,
    /// Left indent in columns, from the font size preference.
    pub margin: usize,
    /// `"{section}/{count}"` within the chapter.
    pub position_label: String,
    /// Scroll progress in percent.
    pub progress: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub is_bookmarked: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Centered title, e.g. the chapter and section being read.
    pub title: String,
    /// Right-aligned preference summary.
    pub status: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "저장된 북마크가 없습니다").
    pub message: String,

    /// Secondary hint text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
    /// Whether keystrokes go to the query rather than the result list.
    pub is_editing: bool,
}
