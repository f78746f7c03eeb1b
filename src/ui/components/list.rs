//! List component renderer.
//!
//! Renders chapter lists, search results and bookmarks. Each item takes one
//! row, plus a snippet row for search results.

use crate::ui::helpers::{self, display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ListItem, ListView};

/// Indent before the snippet row of a search result.
const SNIPPET_INDENT: usize = 4;
const BOOKMARK_MARK: &str = "★ ";

/// Renders the caption and all items starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_list(row: usize, list: &ListView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {}", truncate_to_width(&list.caption, cols.saturating_sub(1)));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for item in &list.items {
        current_row = render_item(current_row, item, theme, cols);
        if list.rows_per_item > 1 {
            current_row = render_snippet_row(current_row, item, theme, cols);
        }
    }
    current_row
}

fn apply_row_style(item: &ListItem, theme: &Theme) {
    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
}

/// Renders one item row.
///
/// ```text
///  ★ 📋 LABEL  detail                                  badge
/// ```
///
/// The label is truncated first so the badge always stays visible.
fn render_item(row: usize, item: &ListItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    apply_row_style(item, theme);
    print!(" ");
    let mut used = 1;

    if item.is_marked {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.bookmark_fg));
        }
        print!("{BOOKMARK_MARK}");
        apply_row_style(item, theme);
        used += display_width(BOOKMARK_MARK);
    }

    if let Some(icon) = &item.icon {
        print!("{icon} ");
        used += display_width(icon) + 1;
    }

    let badge = item.badge.as_ref().map(|b| format!(" {b} ")).unwrap_or_default();
    let badge_width = display_width(&badge);

    let label = truncate_to_width(&item.label, cols.saturating_sub(used + badge_width));
    if item.is_selected {
        print!("{}", Theme::bold());
    }
    print!("{label}");
    used += display_width(&label);

    if let Some(detail) = &item.detail {
        let room = cols.saturating_sub(used + badge_width + 2);
        if room > 1 {
            let detail = truncate_to_width(detail, room);
            if !item.is_selected {
                print!("{}", Theme::fg(&theme.colors.text_dim));
            }
            print!("  {detail}");
            used += display_width(&detail) + 2;
            apply_row_style(item, theme);
        }
    }

    print!("{}", " ".repeat(cols.saturating_sub(used + badge_width)));
    print!("{badge}");
    print!("{}", Theme::reset());
    row + 1
}

fn render_snippet_row(row: usize, item: &ListItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    if item.is_selected {
        apply_row_style(item, theme);
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", " ".repeat(SNIPPET_INDENT));

    let room = cols.saturating_sub(SNIPPET_INDENT);
    let used = item.snippet.as_ref().map_or(0, |snippet| {
        helpers::render_snippet(snippet, theme, item.is_selected, room)
    });

    print!("{}", " ".repeat(room.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
