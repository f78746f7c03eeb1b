//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the
//! domain/content/search/storage layers.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! Key → Event → handle_event → AppState operations → Actions → main.rs
//!                                    ↓
//!                           compute_viewmodel → renderer
//! ```
//!
//! Every operation is synchronous. An operation either fully applies and
//! returns its render events, or is rejected and returns none.
//!
//! # Modules
//!
//! - [`actions`]: Render events emitted by operations
//! - [`handler`]: Event processing and dispatch by mode
//! - [`modes`]: Input and view mode types
//! - [`navigation`]: Cursor movement over chapters and sections
//! - [`state`]: Central state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use refdoc::app::{AppState, Position};
//! use refdoc::bookmarks::BookmarkStore;
//! use refdoc::domain::Document;
//! use refdoc::storage::{MemoryStore, PreferenceStore};
//!
//! let document = Document::from_json(
//!     r#"[{"title": "총칙", "sections": [{"title": "목적", "content": "본문"}]}]"#,
//! )?;
//! let mut state = AppState::new(
//!     document,
//!     BookmarkStore::load(Box::new(MemoryStore::new())),
//!     PreferenceStore::load(Box::new(MemoryStore::new())),
//! );
//! state.go_to_result(0, 0);
//! assert_eq!(state.cursor(), Some(Position::new(0, 0)));
//! # Ok::<(), refdoc::domain::ViewerError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus, ViewMode};
pub use navigation::Position;
pub use state::AppState;
