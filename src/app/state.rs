//! Application state management and view model computation.
//!
//! [`AppState`] owns everything the viewer knows: the document, the cursor,
//! the bookmark and preference stores, the last search and the transient
//! list/scroll positions. It is the single source of truth; the renderer only
//! ever sees a [`UIViewModel`] computed from it.
//!
//! Cursor movement lives in [`navigation`](crate::app::navigation); this file
//! holds the remaining operations and the view model.

use super::modes::{InputMode, SearchFocus, ViewMode};
use super::navigation::Position;
use crate::app::Action;
use crate::bookmarks::BookmarkStore;
use crate::content::{Block, FormatOptions};
use crate::domain::{Document, Preferences};
use crate::search::{SearchEngine, SearchResult};
use crate::storage::PreferenceStore;
use crate::ui::layout::{layout_section, ContentLine};
use crate::ui::theme::{Theme, Themes};
use crate::ui::viewmodel::{
    Body, EmptyState, FooterInfo, HeaderInfo, ListItem, ListView, ReadingView, SearchBarInfo,
    UIViewModel,
};

/// Rows used by the blank top line, header, two borders and footer.
const CHROME_ROWS: usize = 5;
/// Rows used by the search box when it is visible.
const SEARCH_BAR_ROWS: usize = 3;
/// Caption row above lists and status row under section text.
const BODY_CAPTION_ROWS: usize = 1;

/// Central application state container.
pub struct AppState {
    pub(crate) document: Document,
    pub(crate) cursor: Option<Position>,
    pub(crate) bookmarks: BookmarkStore,
    pub(crate) preferences: PreferenceStore,
    pub(crate) search_engine: SearchEngine,
    pub(crate) format_options: FormatOptions,
    pub(crate) themes: Themes,

    pub(crate) view_mode: ViewMode,
    pub(crate) input_mode: InputMode,

    /// Query text being edited in the search bar.
    pub(crate) search_input: String,
    /// Last submitted query, trimmed.
    pub(crate) last_query: String,
    pub(crate) search_results: Vec<SearchResult>,

    /// Selection within the chapter, result or bookmark list.
    pub(crate) selected_index: usize,
    /// First visible line of section text.
    pub(crate) scroll_offset: usize,
    /// Blocks of the section under the cursor.
    pub(crate) current_blocks: Vec<Block>,
    /// Last `(rows, cols)` rendered, used to clamp scrolling.
    pub(crate) viewport: Option<(usize, usize)>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cursor", &self.cursor)
            .field("view_mode", &self.view_mode)
            .field("input_mode", &self.input_mode)
            .field("last_query", &self.last_query)
            .field("result_count", &self.search_results.len())
            .field("bookmark_count", &self.bookmarks.len())
            .field("preferences", &self.preferences.get())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Creates the state for a loaded document, starting at the welcome view.
    #[must_use]
    pub fn new(document: Document, bookmarks: BookmarkStore, preferences: PreferenceStore) -> Self {
        Self {
            document,
            cursor: None,
            bookmarks,
            preferences,
            search_engine: SearchEngine::default(),
            format_options: FormatOptions::default(),
            themes: Themes::default(),
            view_mode: ViewMode::Welcome,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            last_query: String::new(),
            search_results: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            current_blocks: Vec::new(),
            viewport: None,
        }
    }

    #[must_use]
    pub fn with_search_engine(mut self, engine: SearchEngine) -> Self {
        self.search_engine = engine;
        self
    }

    #[must_use]
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.format_options = options;
        self
    }

    #[must_use]
    pub fn with_themes(mut self, themes: Themes) -> Self {
        self.themes = themes;
        self
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub const fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub const fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.preferences.get()
    }

    #[must_use]
    pub fn search_results(&self) -> &[SearchResult] {
        &self.search_results
    }

    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Palette for the current dark-mode preference.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.themes.for_mode(self.preferences.get().dark_mode)
    }

    /// Hands the stores back, e.g. to reload them in a fresh state.
    #[must_use]
    pub fn into_stores(self) -> (BookmarkStore, PreferenceStore) {
        (self.bookmarks, self.preferences)
    }

    // ---- search ---------------------------------------------------------

    /// Runs `query` and shows its results.
    ///
    /// A blank query changes nothing and emits nothing. Otherwise the cursor is
    /// cleared and one [`Action::SearchResultsReady`] is emitted, even when no
    /// section matched.
    pub fn run_search(&mut self, query: &str) -> Vec<Action> {
        let query = query.trim();
        let _span = tracing::debug_span!("run_search", query = %query).entered();

        if query.is_empty() {
            return Vec::new();
        }

        let results = self.search_engine.search(&self.document, query);
        tracing::debug!(result_count = results.len(), "search results ready");

        self.cursor = None;
        self.view_mode = ViewMode::SearchResults;
        self.selected_index = 0;
        self.last_query = query.to_string();
        self.search_results.clone_from(&results);

        vec![Action::SearchResultsReady {
            query: query.to_string(),
            results,
        }]
    }

    /// Opens the search bar for a new query.
    pub fn enter_search(&mut self) {
        tracing::debug!("entering search mode");
        self.input_mode = InputMode::Search(SearchFocus::Typing);
        self.search_input.clear();
    }

    /// Returns focus to the query of the current search.
    pub fn focus_search_bar(&mut self) {
        if matches!(self.input_mode, InputMode::Search(_)) {
            self.input_mode = InputMode::Search(SearchFocus::Typing);
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        tracing::trace!(query = %self.search_input, "search query updated");
    }

    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
    }

    /// Submits the query in the search bar.
    ///
    /// A blank query closes the search bar instead.
    pub fn submit_search(&mut self) -> Vec<Action> {
        let query = self.search_input.clone();
        let actions = self.run_search(&query);
        if actions.is_empty() {
            self.input_mode = InputMode::Normal;
            self.search_input.clear();
        } else {
            self.input_mode = InputMode::Search(SearchFocus::Navigating);
        }
        actions
    }

    /// Closes the search bar. Leaving the result list returns to the welcome view.
    pub fn exit_search(&mut self) -> Vec<Action> {
        tracing::debug!(query = %self.search_input, "exiting search mode");
        self.input_mode = InputMode::Normal;
        self.search_input.clear();
        if self.view_mode == ViewMode::SearchResults {
            self.show_welcome()
        } else {
            Vec::new()
        }
    }

    // ---- bookmarks ------------------------------------------------------

    /// Toggles the bookmark of the section being read, or of the selected
    /// entry in the bookmark list.
    pub fn toggle_bookmark(&mut self) -> Vec<Action> {
        let target = match self.view_mode {
            ViewMode::Reading => self.cursor,
            ViewMode::Bookmarks => self
                .bookmarks
                .list()
                .get(self.selected_index)
                .map(|b| Position::new(b.chapter_index, b.section_index)),
            ViewMode::Welcome | ViewMode::SearchResults => None,
        };
        let Some(position) = target else {
            return Vec::new();
        };

        let title = self
            .document
            .section(position.chapter, position.section)
            .map(|s| s.title.clone())
            .or_else(|| {
                self.bookmarks
                    .list()
                    .get(self.selected_index)
                    .map(|b| b.title.clone())
            })
            .unwrap_or_default();

        let bookmarked = self.bookmarks.toggle(position.chapter, position.section, &title);
        self.clamp_selection();

        vec![
            Action::BookmarkStateChanged {
                chapter: position.chapter,
                section: position.section,
                bookmarked,
            },
            Action::BookmarkListChanged {
                bookmarks: self.bookmarks.list().to_vec(),
            },
        ]
    }

    /// Shows the bookmark list. The cursor is kept so the reader can return.
    pub fn show_bookmarks(&mut self) -> Vec<Action> {
        self.view_mode = ViewMode::Bookmarks;
        self.selected_index = 0;
        vec![Action::BookmarkListChanged {
            bookmarks: self.bookmarks.list().to_vec(),
        }]
    }

    /// Leaves the bookmark list, back to the section if one is current.
    pub fn close_bookmarks(&mut self) -> Vec<Action> {
        match self.cursor {
            Some(position) => {
                self.view_mode = ViewMode::Reading;
                vec![Action::BookmarkStateChanged {
                    chapter: position.chapter,
                    section: position.section,
                    bookmarked: self.bookmarks.has(position.chapter, position.section),
                }]
            }
            None => self.show_welcome(),
        }
    }

    // ---- preferences ----------------------------------------------------

    pub fn toggle_dark_mode(&mut self) -> Vec<Action> {
        let mut preferences = self.preferences.get();
        preferences.dark_mode = !preferences.dark_mode;
        self.set_preferences(preferences)
    }

    pub fn cycle_font_size(&mut self) -> Vec<Action> {
        let mut preferences = self.preferences.get();
        preferences.font_size = preferences.font_size.next();
        self.set_preferences(preferences)
    }

    fn set_preferences(&mut self, preferences: Preferences) -> Vec<Action> {
        tracing::debug!(
            dark_mode = preferences.dark_mode,
            font_size = preferences.font_size.label(),
            "preferences changed"
        );
        self.preferences.update(preferences);
        self.clamp_scroll();
        vec![Action::PreferencesChanged { preferences }]
    }

    // ---- lists and scrolling --------------------------------------------

    fn list_len(&self) -> usize {
        match self.view_mode {
            ViewMode::Welcome => self.document.chapters().len(),
            ViewMode::SearchResults => self.search_results.len(),
            ViewMode::Bookmarks => self.bookmarks.len(),
            ViewMode::Reading => 0,
        }
    }

    /// Moves the list selection down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the list selection up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.list_len().saturating_sub(1));
    }

    /// Opens the selected chapter, search result or bookmark.
    pub fn activate_selection(&mut self) -> Vec<Action> {
        let index = self.selected_index;
        match self.view_mode {
            ViewMode::Welcome => self.select_chapter(index),
            ViewMode::SearchResults => match self.search_results.get(index) {
                Some(result) => self.go_to_result(result.chapter_index, result.section_index),
                None => Vec::new(),
            },
            ViewMode::Bookmarks => match self.bookmarks.list().get(index) {
                Some(bookmark) => self.go_to_result(bookmark.chapter_index, bookmark.section_index),
                None => Vec::new(),
            },
            ViewMode::Reading => Vec::new(),
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        if self.view_mode != ViewMode::Reading {
            return;
        }
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        self.clamp_scroll();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        if self.view_mode != ViewMode::Reading {
            return;
        }
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Records the pane size so scrolling can stop at the end of the text.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = Some((rows, cols));
        self.clamp_scroll();
    }

    /// Rows of section text that fit in the current viewport.
    #[must_use]
    pub fn page_rows(&self) -> usize {
        self.viewport
            .map_or(1, |(rows, _)| self.text_rows(rows).max(1))
    }

    fn clamp_scroll(&mut self) {
        if let Some((rows, cols)) = self.viewport {
            let total = self.reading_lines(cols).len();
            self.scroll_offset = self.scroll_offset.min(total.saturating_sub(self.text_rows(rows)));
        }
    }

    fn text_rows(&self, rows: usize) -> usize {
        rows.saturating_sub(self.chrome_rows() + BODY_CAPTION_ROWS)
    }

    const fn chrome_rows(&self) -> usize {
        match self.input_mode {
            InputMode::Normal => CHROME_ROWS,
            InputMode::Search(_) => CHROME_ROWS + SEARCH_BAR_ROWS,
        }
    }

    fn reading_lines(&self, cols: usize) -> Vec<ContentLine> {
        let Some(section) = self
            .cursor
            .and_then(|p| self.document.section(p.chapter, p.section))
        else {
            return Vec::new();
        };
        let margin = self.preferences.get().font_size.margin();
        let width = cols.saturating_sub(margin * 2).max(1);
        layout_section(&section.title, &self.current_blocks, width)
    }

    // ---- view model -----------------------------------------------------

    /// Computes a renderable view model for a pane of `rows` × `cols` cells.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.view_mode {
            ViewMode::Welcome => self.compute_chapter_list(rows),
            ViewMode::Reading => self.compute_reading(rows, cols),
            ViewMode::SearchResults => self.compute_result_list(rows),
            ViewMode::Bookmarks => self.compute_bookmark_list(rows),
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            body,
            footer: self.compute_footer(),
        }
    }

    /// First visible item so that the selection stays roughly centred.
    fn visible_window(&self, len: usize, capacity: usize) -> (usize, usize) {
        let capacity = capacity.max(1);
        let mut start = self.selected_index.saturating_sub(capacity / 2);
        let end = (start + capacity).min(len);
        if end - start < capacity && len >= capacity {
            start = end.saturating_sub(capacity);
        }
        (start, end)
    }

    fn list_rows(&self, rows: usize) -> usize {
        rows.saturating_sub(self.chrome_rows() + BODY_CAPTION_ROWS)
    }

    fn compute_chapter_list(&self, rows: usize) -> Body {
        let chapters = self.document.chapters();
        let (start, end) = self.visible_window(chapters.len(), self.list_rows(rows));

        let items = chapters[start..end]
            .iter()
            .map(|chapter| ListItem {
                icon: chapter.icon.clone(),
                label: chapter.title.clone(),
                detail: (!chapter.description.is_empty()).then(|| chapter.description.clone()),
                badge: Some(chapter.sections.len().to_string()),
                snippet: None,
                is_selected: chapter.index == self.selected_index,
                is_marked: false,
            })
            .collect();

        Body::List(ListView {
            caption: format!(
                "{}개 장 · {}개 조항",
                chapters.len(),
                self.document.total_sections()
            ),
            items,
            selected_index: self.selected_index.saturating_sub(start),
            rows_per_item: 1,
        })
    }

    fn compute_result_list(&self, rows: usize) -> Body {
        if self.search_results.is_empty() {
            return Body::Empty(EmptyState {
                message: format!("\"{}\"에 대한 검색 결과가 없습니다.", self.last_query),
                subtitle: "Press / to search again".to_string(),
            });
        }

        let capacity = self.list_rows(rows) / 2;
        let (start, end) = self.visible_window(self.search_results.len(), capacity);

        let items = self.search_results[start..end]
            .iter()
            .enumerate()
            .map(|(offset, result)| ListItem {
                icon: None,
                label: format!("{} › {}", result.chapter_title, result.section_title),
                detail: None,
                badge: None,
                snippet: Some(result.snippet.clone()),
                is_selected: start + offset == self.selected_index,
                is_marked: self.bookmarks.has(result.chapter_index, result.section_index),
            })
            .collect();

        Body::List(ListView {
            caption: format!(
                "\"{}\"에 대해 {}개의 결과를 찾았습니다.",
                self.last_query,
                self.search_results.len()
            ),
            items,
            selected_index: self.selected_index.saturating_sub(start),
            rows_per_item: 2,
        })
    }

    fn compute_bookmark_list(&self, rows: usize) -> Body {
        let bookmarks = self.bookmarks.list();
        if bookmarks.is_empty() {
            return Body::Empty(EmptyState {
                message: "저장된 북마크가 없습니다".to_string(),
                subtitle: "Press b while reading to bookmark a section".to_string(),
            });
        }

        let (start, end) = self.visible_window(bookmarks.len(), self.list_rows(rows));

        let items = bookmarks[start..end]
            .iter()
            .enumerate()
            .map(|(offset, bookmark)| ListItem {
                icon: None,
                label: bookmark.title.clone(),
                detail: self
                    .document
                    .chapter(bookmark.chapter_index)
                    .map(|c| c.short_title()),
                badge: None,
                snippet: None,
                is_selected: start + offset == self.selected_index,
                is_marked: true,
            })
            .collect();

        Body::List(ListView {
            caption: format!("북마크 {}개", bookmarks.len()),
            items,
            selected_index: self.selected_index.saturating_sub(start),
            rows_per_item: 1,
        })
    }

    fn compute_reading(&self, rows: usize, cols: usize) -> Body {
        let Some(position) = self.cursor else {
            return self.compute_chapter_list(rows);
        };
        let section_count = self
            .document
            .chapter(position.chapter)
            .map_or(0, |c| c.sections.len());

        let lines = self.reading_lines(cols);
        let visible = self.text_rows(rows);
        let max_offset = lines.len().saturating_sub(visible);
        let offset = self.scroll_offset.min(max_offset);
        let progress = if max_offset == 0 {
            100
        } else {
            offset * 100 / max_offset
        };

        Body::Reading(ReadingView {
            lines: lines.into_iter().skip(offset).take(visible).collect(),
            margin: self.preferences.get().font_size.margin(),
            position_label: format!("{}/{}", position.section + 1, section_count),
            progress,
            has_prev: position.section > 0,
            has_next: position.section + 1 < section_count,
            is_bookmarked: self.bookmarks.has(position.chapter, position.section),
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match (self.view_mode, self.cursor) {
            (ViewMode::Reading, Some(position)) => {
                let chapter = self.document.chapter(position.chapter);
                let section = self.document.section(position.chapter, position.section);
                match (chapter, section) {
                    (Some(c), Some(s)) => format!(" {} › {} ", c.title, s.title),
                    _ => " 목차 ".to_string(),
                }
            }
            (ViewMode::SearchResults, _) => " 검색 결과 ".to_string(),
            (ViewMode::Bookmarks, _) => " 북마크 ".to_string(),
            _ => " 목차 ".to_string(),
        };

        let preferences = self.preferences.get();
        HeaderInfo {
            title,
            status: format!(
                "{} · {}",
                if preferences.dark_mode { "dark" } else { "light" },
                preferences.font_size.label()
            ),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.view_mode) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: exit search  Enter: search  Type to edit query"
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: open"
            }
            (InputMode::Normal, ViewMode::Reading) => {
                "h/l: section  1-9: jump  j/k: scroll  b: bookmark  B: bookmarks  /: search  ESC: contents  q: quit"
            }
            (InputMode::Normal, ViewMode::Bookmarks) => {
                "j/k: navigate  Enter: open  b: remove  ESC: back  q: quit"
            }
            (InputMode::Normal, _) => {
                "j/k: navigate  Enter: open  /: search  B: bookmarks  d: dark  f: font  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_input.clone(),
                is_editing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{state, state_with_backends};
    use crate::domain::FontSize;
    use crate::storage::MemoryStore;

    #[test]
    fn test_run_search_clears_cursor_and_reports_results() {
        let mut state = state();
        state.select_chapter(0);

        let actions = state.run_search("  포상 ");
        assert_eq!(state.cursor(), None);
        assert_eq!(state.view_mode(), ViewMode::SearchResults);
        match &actions[..] {
            [Action::SearchResultsReady { query, results }] => {
                assert_eq!(query, "포상");
                assert_eq!(results.len(), state.search_results().len());
                assert!(!results.is_empty());
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn test_blank_search_is_noop() {
        let mut state = state();
        state.select_chapter(1);
        assert!(state.run_search("   ").is_empty());
        assert_eq!(state.cursor(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_search_without_matches_still_reports() {
        let mut state = state();
        let actions = state.run_search("없는단어");
        assert!(matches!(
            &actions[..],
            [Action::SearchResultsReady { results, .. }] if results.is_empty()
        ));
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, Body::Empty(_)));
    }

    #[test]
    fn test_submit_blank_query_closes_search_bar() {
        let mut state = state();
        state.enter_search();
        state.push_search_char(' ');
        assert!(state.submit_search().is_empty());
        assert_eq!(state.input_mode(), InputMode::Normal);
    }

    #[test]
    fn test_activate_search_result_opens_section() {
        let mut state = state();
        state.run_search("포상");
        state.move_selection_down();
        let expected = state.search_results()[1].clone();
        state.activate_selection();
        assert_eq!(
            state.cursor(),
            Some(Position::new(expected.chapter_index, expected.section_index))
        );
        assert_eq!(state.view_mode(), ViewMode::Reading);
    }

    #[test]
    fn test_toggle_bookmark_requires_reading_view() {
        let mut state = state();
        assert!(state.toggle_bookmark().is_empty());

        state.select_chapter(0);
        state.select_section(1);
        let actions = state.toggle_bookmark();
        assert_eq!(
            actions[0],
            Action::BookmarkStateChanged {
                chapter: 0,
                section: 1,
                bookmarked: true
            }
        );
        assert!(state.bookmarks().has(0, 1));
        assert_eq!(state.bookmarks().list()[0].title, "1-2. 용어");
    }

    #[test]
    fn test_toggle_in_bookmark_list_removes_selected() {
        let mut state = state();
        state.go_to_result(0, 0);
        state.toggle_bookmark();
        state.go_to_result(1, 1);
        state.toggle_bookmark();

        state.show_bookmarks();
        state.move_selection_down();
        state.toggle_bookmark();
        let ids: Vec<&str> = state.bookmarks().list().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["0-0"]);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_close_bookmarks_returns_to_section() {
        let mut state = state();
        state.go_to_result(1, 1);
        state.show_bookmarks();
        state.close_bookmarks();
        assert_eq!(state.view_mode(), ViewMode::Reading);

        state.show_welcome();
        state.show_bookmarks();
        assert_eq!(state.close_bookmarks(), vec![Action::WelcomeShown]);
    }

    #[test]
    fn test_preferences_persist() {
        let mut state = state();
        state.toggle_dark_mode();
        state.cycle_font_size();
        assert!(state.preferences().dark_mode);
        assert_eq!(state.preferences().font_size, FontSize::Large);

        let (_, preferences) = state.into_stores();
        let reloaded = PreferenceStore::load(preferences.into_backend());
        assert!(reloaded.get().dark_mode);
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = state();
        let chapters = state.document().chapters().len();
        state.move_selection_up();
        assert_eq!(state.selected_index(), chapters - 1);
        state.move_selection_down();
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut state = state_with_backends(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()));
        state.go_to_result(0, 2);
        state.set_viewport(12, 40);
        state.scroll_down(10_000);
        let clamped = state.scroll_offset();
        state.scroll_down(1);
        assert_eq!(state.scroll_offset(), clamped);
        state.scroll_up(10_000);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_viewmodel_reading_view() {
        let mut state = state();
        state.go_to_result(0, 1);
        let vm = state.compute_viewmodel(30, 80);
        assert!(vm.header.title.contains("1-2. 용어"));
        match vm.body {
            Body::Reading(view) => {
                assert_eq!(view.position_label, "2/3");
                assert!(view.has_prev && view.has_next);
                assert!(!view.lines.is_empty());
            }
            other => panic!("expected reading view, got {other:?}"),
        }
    }

    #[test]
    fn test_viewmodel_search_bar_only_in_search_mode() {
        let mut state = state();
        assert!(state.compute_viewmodel(24, 80).search_bar.is_none());
        state.enter_search();
        state.push_search_char('P');
        let bar = state.compute_viewmodel(24, 80).search_bar.unwrap();
        assert_eq!(bar.query, "P");
        assert!(bar.is_editing);
    }
}
