//! Event handling and state transition logic.
//!
//! The plugin runtime translates keys into [`Event`]s; [`handle_event`] applies
//! them to [`AppState`] and returns whether to re-render plus the render
//! events the operations emitted.
//!
//! # Event Types
//!
//! - **Movement**: `KeyDown`, `KeyUp`, `PageDown`, `PageUp`, `PrevSection`,
//!   `NextSection`, `JumpToSection`
//! - **Selection**: `Select`, `Escape`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `Char`, `Backspace`, `ExitSearch`
//! - **Commands**: `ToggleBookmark`, `ShowBookmarks`, `ToggleDarkMode`,
//!   `CycleFontSize`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use refdoc::app::{handle_event, AppState, Event};
//! use refdoc::bookmarks::BookmarkStore;
//! use refdoc::domain::Document;
//! use refdoc::storage::{MemoryStore, PreferenceStore};
//!
//! let document = Document::from_json(
//!     r#"[{"title": "총칙", "sections": [{"title": "목적", "content": "..."}]}]"#,
//! )?;
//! let mut state = AppState::new(
//!     document,
//!     BookmarkStore::load(Box::new(MemoryStore::new())),
//!     PreferenceStore::load(Box::new(MemoryStore::new())),
//! );
//! let (should_render, actions) = handle_event(&mut state, &Event::Select)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 3);
//! # Ok::<(), refdoc::domain::ViewerError>(())
//! ```

use super::modes::{InputMode, SearchFocus, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Lines moved by one scroll step.
const SCROLL_STEP: usize = 1;

/// Events triggered by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the list selection down, or scrolls section text.
    KeyDown,
    /// Moves the list selection up, or scrolls section text.
    KeyUp,
    /// Scrolls section text by one page.
    PageDown,
    PageUp,
    /// Previous section of the current chapter.
    PrevSection,
    /// Next section of the current chapter.
    NextSection,
    /// Jumps to a section of the current chapter by zero-based index.
    JumpToSection(usize),
    /// Opens the selected list entry, or submits the query being typed.
    Select,
    /// Leaves the current view: bookmarks or reading return towards the chapter list.
    Escape,

    /// Opens the search bar.
    SearchMode,
    /// Returns focus to the search bar while browsing results.
    FocusSearchBar,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Closes the search bar.
    ExitSearch,

    ToggleBookmark,
    ShowBookmarks,
    ToggleDarkMode,
    CycleFontSize,

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions.
///
/// The boolean is `true` when the screen should be redrawn.
///
/// # Errors
///
/// No current event fails; the `Result` keeps the plugin's error path uniform.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let typing = state.input_mode == InputMode::Search(SearchFocus::Typing);

    let outcome = match *event {
        Event::KeyDown => {
            if state.view_mode == ViewMode::Reading {
                state.scroll_down(SCROLL_STEP);
            } else {
                state.move_selection_down();
            }
            (true, Vec::new())
        }
        Event::KeyUp => {
            if state.view_mode == ViewMode::Reading {
                state.scroll_up(SCROLL_STEP);
            } else {
                state.move_selection_up();
            }
            (true, Vec::new())
        }
        Event::PageDown => {
            let page = state.page_rows();
            state.scroll_down(page);
            (true, Vec::new())
        }
        Event::PageUp => {
            let page = state.page_rows();
            state.scroll_up(page);
            (true, Vec::new())
        }
        Event::PrevSection => rendered(state.prev_section()),
        Event::NextSection => rendered(state.next_section()),
        Event::JumpToSection(index) => rendered(state.select_section(index)),
        Event::Select => {
            if typing {
                (true, state.submit_search())
            } else {
                let actions = state.activate_selection();
                if !actions.is_empty() {
                    state.input_mode = InputMode::Normal;
                }
                rendered(actions)
            }
        }
        Event::Escape => match state.view_mode {
            ViewMode::Bookmarks => (true, state.close_bookmarks()),
            ViewMode::Reading | ViewMode::SearchResults => (true, state.show_welcome()),
            ViewMode::Welcome => (false, Vec::new()),
        },

        Event::SearchMode => {
            state.enter_search();
            (true, Vec::new())
        }
        Event::FocusSearchBar => {
            state.focus_search_bar();
            (true, Vec::new())
        }
        Event::Char(c) => {
            if !typing {
                return Ok((false, Vec::new()));
            }
            state.push_search_char(c);
            (true, Vec::new())
        }
        Event::Backspace => {
            if !typing {
                return Ok((false, Vec::new()));
            }
            state.pop_search_char();
            (true, Vec::new())
        }
        Event::ExitSearch => (true, state.exit_search()),

        Event::ToggleBookmark => rendered(state.toggle_bookmark()),
        Event::ShowBookmarks => (true, state.show_bookmarks()),
        Event::ToggleDarkMode => (true, state.toggle_dark_mode()),
        Event::CycleFontSize => (true, state.cycle_font_size()),

        Event::CloseFocus => (false, vec![Action::CloseFocus]),
    };

    tracing::debug!(
        should_render = outcome.0,
        action_count = outcome.1.len(),
        "event handled"
    );
    Ok(outcome)
}

/// Redraw only when the operation changed something.
fn rendered(actions: Vec<Action>) -> (bool, Vec<Action>) {
    (!actions.is_empty(), actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::Position;
    use crate::app::test_support::state;

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|e| handle_event(state, e).unwrap().1)
            .collect()
    }

    #[test]
    fn test_select_opens_highlighted_chapter() {
        let mut state = state();
        send(&mut state, &[Event::KeyDown, Event::Select]);
        assert_eq!(state.cursor(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_typed_query_runs_on_enter() {
        let mut state = state();
        let mut events = vec![Event::SearchMode];
        events.extend("px.".chars().map(Event::Char));
        events.push(Event::Select);

        let actions = send(&mut state, &events);
        assert!(matches!(
            actions.last(),
            Some(Action::SearchResultsReady { query, results }) if query == "px." && results.len() == 1
        ));
        assert_eq!(state.input_mode(), InputMode::Search(SearchFocus::Navigating));

        send(&mut state, &[Event::Select]);
        assert_eq!(state.cursor(), Some(Position::new(1, 1)));
        assert_eq!(state.input_mode(), InputMode::Normal);
    }

    #[test]
    fn test_chars_are_ignored_outside_typing() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.search_input(), "");
    }

    #[test]
    fn test_backspace_edits_query() {
        let mut state = state();
        send(
            &mut state,
            &[Event::SearchMode, Event::Char('a'), Event::Char('b'), Event::Backspace],
        );
        assert_eq!(state.search_input(), "a");
    }

    #[test]
    fn test_exit_search_from_results_returns_to_welcome() {
        let mut state = state();
        state.run_search("포상");
        state.input_mode = InputMode::Search(SearchFocus::Navigating);
        let actions = send(&mut state, &[Event::ExitSearch]);
        assert_eq!(actions, vec![Action::WelcomeShown]);
        assert_eq!(state.input_mode(), InputMode::Normal);
    }

    #[test]
    fn test_section_keys() {
        let mut state = state();
        send(&mut state, &[Event::Select, Event::NextSection, Event::NextSection]);
        assert_eq!(state.cursor(), Some(Position::new(0, 2)));

        let (render, actions) = handle_event(&mut state, &Event::NextSection).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        send(&mut state, &[Event::JumpToSection(0)]);
        assert_eq!(state.cursor(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_escape_from_reading_shows_welcome() {
        let mut state = state();
        send(&mut state, &[Event::Select]);
        let actions = send(&mut state, &[Event::Escape]);
        assert_eq!(actions, vec![Action::WelcomeShown]);
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn test_close_focus() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn test_bookmark_keys() {
        let mut state = state();
        let actions = send(&mut state, &[Event::Select, Event::ToggleBookmark]);
        assert!(actions.contains(&Action::BookmarkStateChanged {
            chapter: 0,
            section: 0,
            bookmarked: true
        }));

        send(&mut state, &[Event::ShowBookmarks]);
        assert_eq!(state.view_mode(), ViewMode::Bookmarks);
        send(&mut state, &[Event::Select]);
        assert_eq!(state.view_mode(), ViewMode::Reading);
    }
}
