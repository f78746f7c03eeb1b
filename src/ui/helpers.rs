//! Shared rendering utilities and helpers.
//!
//! All widths here are terminal cell widths, not byte or char counts: the
//! document is mostly Hangul, where every syllable takes two cells.

use crate::search::Snippet;
use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to truncated text.
const TRUNCATION_MARK: char = '…';

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Cuts `text` to at most `max_width` cells, ending in `…` when shortened.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(TRUNCATION_MARK);
    out
}

/// Left padding that centers `text` in `cols` cells.
#[must_use]
pub fn centered_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(text.width()) / 2
}

/// Prints a snippet on one line, clipped to `max_width` cells.
///
/// Matches are painted with the highlight colors. On a selected row the
/// selection colors are restored after each match.
pub fn render_snippet(snippet: &Snippet, theme: &Theme, is_selected: bool, max_width: usize) -> usize {
    let base = || {
        if is_selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else {
            Theme::fg(&theme.colors.text_dim)
        }
    };

    let mut used = 0;
    for (segment, highlighted) in snippet.segments() {
        let flat = segment.replace('\n', " ");
        let remaining = max_width.saturating_sub(used);
        if remaining == 0 {
            break;
        }
        let piece = truncate_to_width(&flat, remaining);
        if highlighted {
            print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
            print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
            print!("{piece}");
            print!("{}", Theme::reset());
            print!("{}", base());
        } else {
            print!("{piece}");
        }
        used += piece.width();
    }
    used
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_is_double_width() {
        assert_eq!(display_width("포상"), 4);
        assert_eq!(display_width("PX"), 2);
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("목적", 4), "목적");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        let cut = truncate_to_width("포상휴가", 6);
        assert_eq!(cut, "포상…");
        assert!(display_width(&cut) <= 6);
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_centered_padding() {
        assert_eq!(centered_padding("목차", 10), 3);
        assert_eq!(centered_padding("wide text", 4), 0);
    }
}
