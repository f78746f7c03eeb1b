//! Section text renderer.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::layout::{ContentLine, LineKind};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ReadingView;

/// Renders the visible section lines followed by a status row.
///
/// `text_rows` is the number of rows available for text; the status row is
/// placed right after them so it stays in one spot while scrolling.
pub fn render_reading(row: usize, view: &ReadingView, theme: &Theme, cols: usize, text_rows: usize) -> usize {
    let indent = " ".repeat(view.margin);

    for (offset, line) in view.lines.iter().take(text_rows).enumerate() {
        position_cursor(row + offset, 1);
        print!("{indent}");
        render_line(line, theme);
        print!("{}", " ".repeat(cols.saturating_sub(view.margin + line.width())));
        print!("{}", Theme::reset());
    }

    let status_row = row + text_rows;
    render_status(status_row, view, theme, cols);
    status_row + 1
}

fn render_line(line: &ContentLine, theme: &Theme) {
    match line.kind {
        LineKind::Title | LineKind::Heading => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.heading_fg));
            print!("{}", line.text);
        }
        LineKind::ListItem => {
            print!("{}", Theme::fg(&theme.colors.list_marker_fg));
            print!("{}", line.prefix);
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", line.text);
        }
        LineKind::Text => {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", line.text);
        }
        LineKind::Blank => {}
    }
}

/// Position, scroll progress, section arrows and bookmark state.
fn render_status(row: usize, view: &ReadingView, theme: &Theme, cols: usize) {
    let prev = if view.has_prev { "◀ h" } else { "   " };
    let next = if view.has_next { "l ▶" } else { "   " };
    let mark = if view.is_bookmarked { "★" } else { "☆" };
    let status = format!(
        "{prev}  {} · {}%  {next}",
        view.position_label, view.progress
    );
    let width = display_width(&status) + display_width(mark) + 1;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(view.margin));
    print!("{status}");
    print!("{}", " ".repeat(cols.saturating_sub(view.margin + width)));
    print!("{}", Theme::fg(&theme.colors.bookmark_fg));
    print!("{mark} ");
    print!("{}", Theme::reset());
}
