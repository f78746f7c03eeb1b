//! Display preferences persisted alongside bookmarks.
//!
//! Preferences are cosmetic: they pick the theme variant and the reading margins.
//! They live under their own storage key and fall back to defaults whenever the
//! stored value is missing or unreadable.

use serde::{Deserialize, Serialize};

/// Reading text size.
///
/// The terminal cannot change its font, so size is approximated by the width of
/// the text column: larger sizes read with wider margins and shorter lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Horizontal margin in columns on each side of section text.
    #[must_use]
    pub const fn margin(self) -> usize {
        match self {
            Self::Small => 2,
            Self::Medium => 4,
            Self::Large => 10,
        }
    }

    /// Next size in the small → medium → large → small cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Small => Self::Medium,
            Self::Medium => Self::Large,
            Self::Large => Self::Small,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// User display preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub font_size: FontSize,
}
