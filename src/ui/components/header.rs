//! Header component renderer.
//!
//! This module renders the title bar: the current location centered and the
//! preference status right-aligned.

use crate::ui::helpers::{centered_padding, display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding] status
/// ```
///
/// The status is dropped when the terminal is too narrow to show both.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let status_width = display_width(&header.status) + 1;
    let show_status = display_width(&header.title) + status_width * 2 <= cols;
    let title_room = if show_status { cols - status_width } else { cols };

    let title = truncate_to_width(&header.title, title_room);
    let title_width = display_width(&title);
    let padding = centered_padding(&title, title_room);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(title_room.saturating_sub(padding + title_width)));
    print!("{}", Theme::reset());

    if show_status {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{} ", header.status);
        print!("{}", Theme::reset());
    }
    row + 1
}
