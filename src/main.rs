//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the refdoc library and the Zellij plugin
//! system: it maps keys to library events, performs the few actions that
//! need the Zellij API, and hands rendering to the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, request permissions
//! 2. **Permission granted**: Load the document and open the stores under
//!    `~/.local/share/zellij/refdoc`
//! 3. **Update**: Map keys to events, delegate to `handle_event`
//! 4. **Render**: Record the pane size, then call the library renderer
//!
//! If the document cannot be loaded the plugin shows the error instead of
//! the viewer; `q` still closes it.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Normal mode:
//! - `j`/`k`, `Down`/`Up`: Move selection, or scroll section text
//! - `h`/`l`, `Left`/`Right`: Previous / next section
//! - `1`-`9`: Jump to section of the current chapter
//! - `PageDown`/`PageUp`, `Space`: Scroll by a page
//! - `Enter`: Open selection
//! - `Esc`: Back to the chapter list
//! - `/`: Search
//! - `b`: Toggle bookmark, `B`: Bookmark list
//! - `d`: Toggle dark mode, `f`: Cycle font size
//! - `q`: Close plugin
//!
//! Search mode:
//! - Typing: characters edit the query, `Enter` runs it
//! - Browsing results: `j`/`k` move, `Enter` opens, `/` edits the query
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use refdoc::infrastructure::{data_dir, display_path};
use refdoc::storage::{DisabledStore, JsonFileStore, KeyValueStore};
use refdoc::ui::viewmodel::{Body, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
use refdoc::{handle_event, Action, AppState, Config, Event, InputMode, SearchFocus, Themes};

register_plugin!(State);

/// Plugin state wrapper.
///
/// The library state exists only once permissions are granted and the
/// document has loaded.
#[derive(Default)]
struct State {
    /// Core application state from library layer.
    app: Option<AppState>,

    /// Parsed plugin configuration, kept until initialization.
    config: Config,

    /// Message shown instead of the viewer while it is not available.
    status: Option<String>,
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `FullHdAccess` to read the document and to persist bookmarks
    /// and preferences on the host.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        refdoc::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(document_path = ?config.document_path, "parsed configuration");
        self.config = config;
        self.status = Some("권한 요청 중...".to_string());

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        match event {
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                true
            }
            zellij_tile::prelude::Event::Key(ref key) => {
                let Some(app) = self.app.as_mut() else {
                    if key.bare_key == BareKey::Char('q') || key.bare_key == BareKey::Esc {
                        hide_self();
                    }
                    return false;
                };
                let Some(our_event) = map_key_event(app.input_mode(), key) else {
                    return false;
                };

                match handle_event(app, &our_event) {
                    Ok((should_render, actions)) => {
                        for action in &actions {
                            execute_action(action);
                        }
                        should_render
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "error handling event");
                        false
                    }
                }
            }
            _ => false,
        }
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        if let Some(app) = self.app.as_mut() {
            app.set_viewport(rows, cols);
            refdoc::ui::render(app, rows, cols);
            return;
        }

        let message = self.status.clone().unwrap_or_default();
        let themes = Themes::default();
        refdoc::ui::render_viewmodel(&status_viewmodel(message), themes.for_mode(false), rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Loads the viewer once the host filesystem is reachable.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - initializing viewer");
                match refdoc::initialize(
                    &self.config,
                    open_store("bookmarks"),
                    open_store("preferences"),
                ) {
                    Ok(app) => {
                        self.app = Some(app);
                        self.status = None;
                    }
                    Err(e) => {
                        let location = self
                            .config
                            .document_file()
                            .map_or_else(|| "bundled document".to_string(), |p| display_path(&p));
                        tracing::error!(error = %e, document = %location, "viewer failed to start");
                        self.status = Some(format!("문서를 불러올 수 없습니다: {e} ({location})"));
                    }
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied");
                self.status = Some("파일 접근 권한이 필요합니다".to_string());
            }
        }
    }
}

/// Opens the JSON store, or a disabled one that keeps the viewer working
/// without persistence.
fn open_store(purpose: &str) -> Box<dyn KeyValueStore> {
    match JsonFileStore::new(data_dir()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, purpose, "storage unavailable, changes will not persist");
            Box::new(DisabledStore::new(e.to_string()))
        }
    }
}

fn status_viewmodel(message: String) -> UIViewModel {
    UIViewModel {
        header: HeaderInfo {
            title: " KATUSA 참고서 ".to_string(),
            status: String::new(),
        },
        search_bar: None,
        body: Body::Empty(EmptyState {
            message,
            subtitle: String::new(),
        }),
        footer: FooterInfo {
            keybindings: "q: quit".to_string(),
        },
    }
}

/// Maps keyboard events to application events.
fn map_key_event(mode: InputMode, key: &KeyWithModifier) -> Option<Event> {
    tracing::debug!(bare_key = ?key.bare_key, ?mode, "key event");

    if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::KeyDown);
    }
    if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::KeyUp);
    }

    Some(match (mode, key.bare_key) {
        (InputMode::Search(_), BareKey::Esc) => Event::ExitSearch,
        (_, BareKey::Enter) => Event::Select,
        (_, BareKey::Down) => Event::KeyDown,
        (_, BareKey::Up) => Event::KeyUp,

        (InputMode::Search(SearchFocus::Typing), BareKey::Backspace) => Event::Backspace,
        (InputMode::Search(SearchFocus::Typing), BareKey::Char(c)) => Event::Char(c),

        (InputMode::Search(SearchFocus::Navigating), BareKey::Char('j')) => Event::KeyDown,
        (InputMode::Search(SearchFocus::Navigating), BareKey::Char('k')) => Event::KeyUp,
        (InputMode::Search(SearchFocus::Navigating), BareKey::Char('/')) => Event::FocusSearchBar,
        (InputMode::Search(SearchFocus::Navigating), BareKey::Char('q')) => Event::CloseFocus,

        (InputMode::Normal, BareKey::Esc) => Event::Escape,
        (InputMode::Normal, BareKey::Char('j')) => Event::KeyDown,
        (InputMode::Normal, BareKey::Char('k')) => Event::KeyUp,
        (InputMode::Normal, BareKey::Char('h') | BareKey::Left) => Event::PrevSection,
        (InputMode::Normal, BareKey::Char('l') | BareKey::Right) => Event::NextSection,
        (InputMode::Normal, BareKey::PageDown | BareKey::Char(' ')) => Event::PageDown,
        (InputMode::Normal, BareKey::PageUp) => Event::PageUp,
        (InputMode::Normal, BareKey::Char(c @ '1'..='9')) => {
            Event::JumpToSection(c.to_digit(10).map_or(0, |d| d as usize - 1))
        }
        (InputMode::Normal, BareKey::Char('/')) => Event::SearchMode,
        (InputMode::Normal, BareKey::Char('b')) => Event::ToggleBookmark,
        (InputMode::Normal, BareKey::Char('B')) => Event::ShowBookmarks,
        (InputMode::Normal, BareKey::Char('d')) => Event::ToggleDarkMode,
        (InputMode::Normal, BareKey::Char('f')) => Event::CycleFontSize,
        (InputMode::Normal, BareKey::Char('q')) => Event::CloseFocus,
        _ => return None,
    })
}

/// Executes an action returned from event handling.
///
/// Only `CloseFocus` needs the Zellij API; the rest are render events the
/// next frame already reflects, so they are only traced.
#[tracing::instrument(level = "debug", skip_all)]
fn execute_action(action: &Action) {
    match action {
        Action::CloseFocus => {
            tracing::debug!("closing plugin focus");
            hide_self();
        }
        Action::SectionShown {
            chapter,
            section,
            blocks,
        } => {
            tracing::debug!(chapter, section, block_count = blocks.len(), "section shown");
        }
        Action::SearchResultsReady { query, results } => {
            tracing::debug!(query = %query, result_count = results.len(), "search results shown");
        }
        other => tracing::trace!(action = ?other, "render event"),
    }
}
