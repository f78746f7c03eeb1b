//! Cursor movement over the document.
//!
//! The cursor is `Option<Position>`: `None` is the welcome state. When set, the
//! position always names an existing section, so every operation here validates
//! before it mutates. An invalid request is a no-op that returns no events.

use crate::app::{Action, AppState, ViewMode};
use crate::content::format_content;

/// A (chapter, section) pair that names an existing section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub chapter: usize,
    pub section: usize,
}

impl Position {
    #[must_use]
    pub const fn new(chapter: usize, section: usize) -> Self {
        Self { chapter, section }
    }
}

impl AppState {
    /// Makes chapter `index` current, at its first section.
    ///
    /// Out-of-range indices and chapters without sections are ignored.
    pub fn select_chapter(&mut self, index: usize) -> Vec<Action> {
        let _span = tracing::debug_span!("select_chapter", index).entered();

        if !self.is_valid(Position::new(index, 0)) {
            tracing::debug!("chapter not selectable");
            return Vec::new();
        }

        self.enter(Position::new(index, 0))
    }

    /// Moves to section `index` of the current chapter.
    ///
    /// Ignored when no chapter is current or `index` is out of range.
    pub fn select_section(&mut self, index: usize) -> Vec<Action> {
        let _span = tracing::debug_span!("select_section", index).entered();

        let Some(current) = self.cursor else {
            tracing::debug!("no current chapter");
            return Vec::new();
        };
        let target = Position::new(current.chapter, index);
        if !self.is_valid(target) {
            tracing::debug!(chapter = current.chapter, "section out of range");
            return Vec::new();
        }

        self.show(target)
    }

    /// Moves one section forward. No-op at the last section.
    pub fn next_section(&mut self) -> Vec<Action> {
        match self.cursor {
            Some(current) => self.select_section(current.section.saturating_add(1)),
            None => Vec::new(),
        }
    }

    /// Moves one section back. No-op at the first section.
    pub fn prev_section(&mut self) -> Vec<Action> {
        match self.cursor {
            Some(current) if current.section > 0 => self.select_section(current.section - 1),
            _ => Vec::new(),
        }
    }

    /// Clears the cursor and returns to the chapter list.
    pub fn show_welcome(&mut self) -> Vec<Action> {
        let _span = tracing::debug_span!("show_welcome").entered();

        self.cursor = None;
        self.view_mode = ViewMode::Welcome;
        self.selected_index = 0;
        vec![Action::WelcomeShown]
    }

    /// Jumps straight to a section, e.g. from a search result or a bookmark.
    ///
    /// Both indices are checked before anything changes. A valid chapter with
    /// an invalid section behaves exactly like [`AppState::select_chapter`].
    pub fn go_to_result(&mut self, chapter: usize, section: usize) -> Vec<Action> {
        let _span = tracing::debug_span!("go_to_result", chapter, section).entered();

        let target = Position::new(chapter, section);
        if self.is_valid(target) {
            self.enter(target)
        } else {
            self.select_chapter(chapter)
        }
    }

    /// Whether `position` names an existing section.
    #[must_use]
    pub fn is_valid(&self, position: Position) -> bool {
        self.document
            .section(position.chapter, position.section)
            .is_some()
    }

    /// Enters a chapter at `position`: one chapter event, then the section.
    fn enter(&mut self, position: Position) -> Vec<Action> {
        let mut actions = vec![Action::ChapterSelected {
            chapter: position.chapter,
        }];
        actions.extend(self.show(position));
        actions
    }

    fn show(&mut self, position: Position) -> Vec<Action> {
        let Some(section) = self.document.section(position.chapter, position.section) else {
            return Vec::new();
        };
        let blocks = format_content(&section.content, &self.format_options);

        self.cursor = Some(position);
        self.view_mode = ViewMode::Reading;
        self.scroll_offset = 0;
        self.current_blocks.clone_from(&blocks);

        tracing::debug!(
            chapter = position.chapter,
            section = position.section,
            block_count = blocks.len(),
            "section shown"
        );

        vec![
            Action::SectionShown {
                chapter: position.chapter,
                section: position.section,
                blocks,
            },
            Action::BookmarkStateChanged {
                chapter: position.chapter,
                section: position.section,
                bookmarked: self.bookmarks.has(position.chapter, position.section),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::state;

    fn section_shown(actions: &[Action]) -> Option<(usize, usize)> {
        actions.iter().find_map(|a| match a {
            Action::SectionShown { chapter, section, .. } => Some((*chapter, *section)),
            _ => None,
        })
    }

    #[test]
    fn test_select_chapter_starts_at_first_section() {
        let mut state = state();
        for i in 0..state.document().chapters().len() - 1 {
            let actions = state.select_chapter(i);
            assert_eq!(state.cursor(), Some(Position::new(i, 0)));
            assert_eq!(actions[0], Action::ChapterSelected { chapter: i });
            assert_eq!(section_shown(&actions), Some((i, 0)));
        }
    }

    #[test]
    fn test_out_of_range_selection_is_noop() {
        let mut state = state();
        assert!(state.select_chapter(99).is_empty());
        assert_eq!(state.cursor(), None);
        assert!(state.select_section(0).is_empty());

        state.select_chapter(1);
        assert!(state.select_chapter(99).is_empty());
        assert!(state.select_section(99).is_empty());
        assert_eq!(state.cursor(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_chapter_without_sections_is_not_selectable() {
        let mut state = state();
        let empty = state.document().chapters().len() - 1;
        assert!(state.select_chapter(empty).is_empty());
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn test_next_then_prev_round_trips() {
        let mut state = state();
        state.select_chapter(0);
        state.select_section(1);
        state.next_section();
        assert_eq!(state.cursor(), Some(Position::new(0, 2)));
        state.prev_section();
        assert_eq!(state.cursor(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_boundaries_do_not_wrap() {
        let mut state = state();
        state.select_chapter(0);
        assert!(state.prev_section().is_empty());
        assert_eq!(state.cursor(), Some(Position::new(0, 0)));

        let last = state.document().chapter(0).unwrap().sections.len() - 1;
        state.select_section(last);
        assert!(state.next_section().is_empty());
        assert_eq!(state.cursor(), Some(Position::new(0, last)));
    }

    #[test]
    fn test_show_welcome_clears_cursor() {
        let mut state = state();
        state.select_chapter(1);
        assert_eq!(state.show_welcome(), vec![Action::WelcomeShown]);
        assert_eq!(state.cursor(), None);
        assert_eq!(state.view_mode(), ViewMode::Welcome);
        assert!(state.next_section().is_empty());
    }

    #[test]
    fn test_go_to_result_is_atomic() {
        let mut state = state();
        let actions = state.go_to_result(1, 1);
        assert_eq!(state.cursor(), Some(Position::new(1, 1)));

        let chapter_events = actions
            .iter()
            .filter(|a| matches!(a, Action::ChapterSelected { .. }))
            .count();
        let section_events = actions
            .iter()
            .filter(|a| matches!(a, Action::SectionShown { .. }))
            .count();
        assert_eq!((chapter_events, section_events), (1, 1));
        assert_eq!(section_shown(&actions), Some((1, 1)));
    }

    #[test]
    fn test_go_to_result_with_bad_section_equals_select_chapter() {
        let mut a = state();
        let mut b = state();
        assert_eq!(a.go_to_result(1, 42), b.select_chapter(1));
        assert_eq!(a.cursor(), b.cursor());
    }

    #[test]
    fn test_go_to_result_with_bad_chapter_is_noop() {
        let mut state = state();
        state.select_chapter(0);
        assert!(state.go_to_result(42, 0).is_empty());
        assert_eq!(state.cursor(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_later_go_to_result_wins() {
        let mut state = state();
        state.go_to_result(0, 2);
        state.go_to_result(1, 0);
        assert_eq!(state.cursor(), Some(Position::new(1, 0)));
    }
}
