//! Theme management and ANSI escape sequence generation.
//!
//! The viewer keeps two palettes, one for light mode and one for dark mode,
//! and switches between them when the dark mode preference changes. Palettes
//! are built in (Catppuccin variants) or loaded from a TOML file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: Light theme (default light palette)
//! - `catppuccin-mocha`: Dark theme (default dark palette)
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! heading_fg = "#cba6f7"
//! list_marker_fg = "#94e2d5"
//! bookmark_fg = "#f9e2af"
//! ```
//!
//! # Example
//!
//! ```rust
//! use refdoc::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{Result, ViewerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in palette used in light mode when none is configured.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";
/// Built-in palette used in dark mode when none is configured.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    pub text_normal: String,
    /// Dimmed text color (footer, captions, descriptions).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Section title and `Label:` heading color.
    pub heading_fg: String,
    /// Bullet and number marker color.
    pub list_marker_fg: String,
    /// Bookmark indicator color.
    pub bookmark_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Theme`] for an unknown name.
    pub fn from_name(name: &str) -> Result<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return Err(ViewerError::Theme(format!("unknown theme: {name}"))),
        };

        Self::from_toml(toml_str)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            ViewerError::Theme(format!(
                "failed to read theme file {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Self::from_toml(&contents)
    }

    fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ViewerError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Uncolored grayscale palette, used only if a built-in fails to load.
    fn plain(name: &str, fg: &str, bg: &str) -> Self {
        let color = |hex: &str| hex.to_string();
        Self {
            name: name.to_string(),
            colors: ThemeColors {
                header_fg: color(fg),
                header_bg: None,
                selection_fg: color(bg),
                selection_bg: color(fg),
                text_normal: color(fg),
                text_dim: color("#808080"),
                border: color("#808080"),
                search_bar_border: color(fg),
                match_highlight_fg: color(bg),
                match_highlight_bg: color(fg),
                empty_state_fg: color(fg),
                heading_fg: color(fg),
                list_marker_fg: color(fg),
                bookmark_fg: color(fg),
            },
        }
    }

    fn builtin_or_plain(name: &str, fg: &str, bg: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|e| {
            tracing::warn!(theme_name = %name, error = %e, "built-in theme unavailable");
            Self::plain(name, fg, bg)
        })
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

/// The light and dark palettes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Themes {
    pub light: Theme,
    pub dark: Theme,
}

impl Default for Themes {
    fn default() -> Self {
        Self {
            light: Theme::builtin_or_plain(DEFAULT_LIGHT_THEME, "#000000", "#ffffff"),
            dark: Theme::builtin_or_plain(DEFAULT_DARK_THEME, "#ffffff", "#000000"),
        }
    }
}

impl Themes {
    /// Resolves the configured palettes.
    ///
    /// A custom `theme_file` is used for both modes. Otherwise each mode uses
    /// its named built-in. Any palette that fails to load falls back to the
    /// default for its mode, with a warning.
    #[must_use]
    pub fn load(light: Option<&str>, dark: Option<&str>, theme_file: Option<&Path>) -> Self {
        let defaults = Self::default();

        if let Some(path) = theme_file {
            match Theme::from_file(path) {
                Ok(theme) => {
                    return Self {
                        light: theme.clone(),
                        dark: theme,
                    }
                }
                Err(e) => {
                    tracing::warn!(theme_file = %path.display(), error = %e, "failed to load theme file, using built-in themes");
                }
            }
        }

        let resolve = |name: Option<&str>, fallback: Theme| {
            name.map_or_else(
                || fallback.clone(),
                |name| {
                    Theme::from_name(name).unwrap_or_else(|e| {
                        tracing::warn!(theme_name = %name, error = %e, "failed to load theme, using default");
                        fallback.clone()
                    })
                },
            )
        };

        Self {
            light: resolve(light, defaults.light),
            dark: resolve(dark, defaults.dark),
        }
    }

    /// Palette for the given dark mode setting.
    #[must_use]
    pub const fn for_mode(&self, dark_mode: bool) -> &Theme {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_unknown_theme_is_error() {
        assert!(matches!(
            Theme::from_name("solarized"),
            Err(ViewerError::Theme(_))
        ));
    }

    #[test]
    fn test_default_modes() {
        let themes = Themes::default();
        assert_eq!(themes.for_mode(false).name, DEFAULT_LIGHT_THEME);
        assert_eq!(themes.for_mode(true).name, DEFAULT_DARK_THEME);
    }

    #[test]
    fn test_load_named_with_fallback() {
        let themes = Themes::load(Some("catppuccin-frappe"), Some("nope"), None);
        assert_eq!(themes.light.name, "catppuccin-frappe");
        assert_eq!(themes.dark.name, DEFAULT_DARK_THEME);
    }

    #[test]
    fn test_theme_file_applies_to_both_modes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../../themes/catppuccin-mocha.toml")
            .replace("catppuccin-mocha", "custom");
        file.write_all(custom.as_bytes()).unwrap();

        let themes = Themes::load(None, None, Some(file.path()));
        assert_eq!(themes.light.name, "custom");
        assert_eq!(themes.dark.name, "custom");
    }

    #[test]
    fn test_bad_theme_file_falls_back() {
        let themes = Themes::load(None, None, Some(Path::new("/nonexistent/theme.toml")));
        assert_eq!(themes, Themes::default());
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("zz"), "\u{1b}[48;2;255;255;255m");
    }
}
