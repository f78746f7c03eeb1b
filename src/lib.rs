//! refdoc: a Zellij plugin for reading a static reference document.
//!
//! The bundled document is the KATUSA soldier reference: chapters of
//! regulations, each split into short sections. The plugin provides:
//! - Chapter and section navigation with a current position
//! - Full-text search over titles and content, with highlighted snippets
//! - Bookmarks that survive plugin restarts
//! - Light/dark palettes and three reading widths, also persisted
//! - Light formatting of plain section text into headings, paragraphs and lists
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, navigation                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!      │             │              │              │
//! ┌──────────┐ ┌───────────┐ ┌─────────────┐ ┌────────────┐
//! │ UI       │ │ Content   │ │ Search      │ │ Bookmarks  │
//! │ (ui/)    │ │ (content/)│ │ (search/)   │ │ (bookmarks/)│
//! └──────────┘ └───────────┘ └─────────────┘ └────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage (storage/), Domain (domain/),              │
//! │  Infrastructure (infrastructure/)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a local OTLP JSON file  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/refdoc.wasm" {
//!         document_path "~/docs/katusa.json"
//!         light_theme "catppuccin-latte"
//!         dark_theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use refdoc::storage::MemoryStore;
//! use refdoc::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(
//!     &Config::default(),
//!     Box::new(MemoryStore::new()),
//!     Box::new(MemoryStore::new()),
//! )?;
//! let (_, actions) = handle_event(&mut state, &Event::Select)?;
//! assert!(!actions.is_empty());
//! # Ok::<(), refdoc::ViewerError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod bookmarks;
pub mod content;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Position, SearchFocus, ViewMode};
pub use domain::{Document, Result, ViewerError};
pub use ui::{Theme, Themes};

use bookmarks::BookmarkStore;
use content::{FormatOptions, DEFAULT_HEADER_COLON_THRESHOLD};
use search::{SearchEngine, SnippetConfig};
use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{KeyValueStore, PreferenceStore};

/// Document compiled into the plugin, used when no `document_path` is set.
pub const BUNDLED_DOCUMENT: &str = include_str!("../assets/sample-document.json");

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/refdoc.wasm" {
///     document_path "~/docs/katusa.json"
///     light_theme "catppuccin-latte"
///     dark_theme "catppuccin-frappe"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
///     header_colon_threshold "30"
///     snippet_before "50"
///     snippet_after "100"
///     snippet_fallback_len "150"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the document JSON. `~` maps to the host home directory.
    ///
    /// Default: the bundled document.
    pub document_path: Option<String>,

    /// Built-in palette for light mode. Default: `catppuccin-latte`.
    pub light_theme: Option<String>,

    /// Built-in palette for dark mode. Default: `catppuccin-mocha`.
    pub dark_theme: Option<String>,

    /// Custom TOML palette used for both modes. Takes precedence over the
    /// named themes. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `refdoc=trace`. Default: `"info"`
    pub trace_level: Option<String>,

    /// A `:` before this character offset makes a line a heading.
    pub header_colon_threshold: usize,

    /// Search snippet window sizes.
    pub snippet: SnippetConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_path: None,
            light_theme: None,
            dark_theme: None,
            theme_file: None,
            trace_level: None,
            header_colon_threshold: DEFAULT_HEADER_COLON_THRESHOLD,
            snippet: SnippetConfig::default(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Blank strings count as unset, and numbers
    /// that fail to parse (or are zero) keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use refdoc::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("document_path".to_string(), "~/docs/katusa.json".to_string());
    /// map.insert("snippet_before".to_string(), "20".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.document_path.as_deref(), Some("~/docs/katusa.json"));
    /// assert_eq!(config.snippet.before, 20);
    /// assert_eq!(config.snippet.after, 100);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        let number = |key: &str, default: usize| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default)
        };

        let defaults = SnippetConfig::default();
        Self {
            document_path: text("document_path"),
            light_theme: text("light_theme"),
            dark_theme: text("dark_theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            header_colon_threshold: number("header_colon_threshold", DEFAULT_HEADER_COLON_THRESHOLD),
            snippet: SnippetConfig {
                before: number("snippet_before", defaults.before),
                after: number("snippet_after", defaults.after),
                fallback_len: number("snippet_fallback_len", defaults.fallback_len),
            },
        }
    }

    /// Sandbox path of the configured document, if any.
    #[must_use]
    pub fn document_file(&self) -> Option<PathBuf> {
        self.document_path
            .as_deref()
            .map(infrastructure::resolve_host_path)
    }
}

/// Loads the configured document, or the bundled one.
///
/// # Errors
///
/// Fails if the document cannot be read or parsed, or has no chapters.
pub fn load_document(config: &Config) -> Result<Document> {
    match config.document_file() {
        Some(path) => Document::from_file(path),
        None => Document::from_json(BUNDLED_DOCUMENT),
    }
}

/// Builds the initial state: document, stores, search, formatting and themes.
///
/// Stores are loaded from the given backends and degrade to empty/default
/// values on any storage failure; only the document can fail startup.
///
/// # Errors
///
/// Returns the document error from [`load_document`].
///
/// # Example
///
/// ```rust
/// use refdoc::storage::MemoryStore;
/// use refdoc::{initialize, Config, ViewMode};
///
/// let state = initialize(
///     &Config::default(),
///     Box::new(MemoryStore::new()),
///     Box::new(MemoryStore::new()),
/// )?;
/// assert_eq!(state.view_mode(), ViewMode::Welcome);
/// # Ok::<(), refdoc::ViewerError>(())
/// ```
pub fn initialize(
    config: &Config,
    bookmarks_backend: Box<dyn KeyValueStore>,
    preferences_backend: Box<dyn KeyValueStore>,
) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize").entered();

    let document = load_document(config).map_err(|e| {
        tracing::error!(error = %e, "failed to load document");
        e
    })?;

    let theme_file = config
        .theme_file
        .as_deref()
        .map(infrastructure::resolve_host_path);
    let themes = Themes::load(
        config.light_theme.as_deref(),
        config.dark_theme.as_deref(),
        theme_file.as_deref(),
    );

    let state = AppState::new(
        document,
        BookmarkStore::load(bookmarks_backend),
        PreferenceStore::load(preferences_backend),
    )
    .with_search_engine(SearchEngine::new(config.snippet))
    .with_format_options(FormatOptions {
        header_colon_threshold: config.header_colon_threshold,
    })
    .with_themes(themes);

    tracing::info!(
        chapters = state.document().chapters().len(),
        sections = state.document().total_sections(),
        bookmarks = state.bookmarks().len(),
        "viewer initialized"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_map_is_default() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn test_invalid_numbers_keep_defaults() {
        let config = Config::from_zellij(&map(&[
            ("header_colon_threshold", "abc"),
            ("snippet_after", "0"),
            ("snippet_fallback_len", " 80 "),
        ]));
        assert_eq!(config.header_colon_threshold, DEFAULT_HEADER_COLON_THRESHOLD);
        assert_eq!(config.snippet.after, 100);
        assert_eq!(config.snippet.fallback_len, 80);
    }

    #[test]
    fn test_blank_strings_are_unset() {
        let config = Config::from_zellij(&map(&[("document_path", "  "), ("dark_theme", "catppuccin-frappe")]));
        assert_eq!(config.document_path, None);
        assert_eq!(config.dark_theme.as_deref(), Some("catppuccin-frappe"));
    }

    #[test]
    fn test_document_path_resolves_into_sandbox() {
        let config = Config::from_zellij(&map(&[("document_path", "~/docs/a.json")]));
        assert_eq!(config.document_file(), Some(PathBuf::from("/host/docs/a.json")));
    }

    #[test]
    fn test_bundled_document_loads() {
        let document = load_document(&Config::default()).unwrap();
        assert!(!document.chapters().is_empty());
        assert!(document.total_sections() > 0);
    }

    #[test]
    fn test_initialize_applies_config() {
        let config = Config {
            dark_theme: Some("catppuccin-macchiato".to_string()),
            ..Config::default()
        };
        let mut state = initialize(&config, Box::new(MemoryStore::new()), Box::new(MemoryStore::new())).unwrap();
        state.toggle_dark_mode();
        assert_eq!(state.theme().name, "catppuccin-macchiato");
    }

    #[test]
    fn test_missing_document_fails_startup() {
        let config = Config {
            document_path: Some("/nonexistent/katusa.json".to_string()),
            ..Config::default()
        };
        let err = initialize(&config, Box::new(MemoryStore::new()), Box::new(MemoryStore::new())).unwrap_err();
        assert!(err.is_fatal());
    }
}
