//! Composable UI component renderers.
//!
//! Each component renders one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with location and preference status
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`list`]: Chapter, result and bookmark lists
//! - [`content`]: Section text with status row
//! - [`empty`]: Empty state message
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Body]
//! [Border]
//! [Footer]
//! ```

mod content;
mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use content::render_reading;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame for `vm`.
///
/// The body gets every row between the top border and the bottom border;
/// the reading view keeps its last row for the status line.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_row = rows;
    let border_row = rows.saturating_sub(1);
    let body_rows = border_row.saturating_sub(current_row);

    match &vm.body {
        Body::List(list) => {
            render_list(current_row, list, theme, cols);
        }
        Body::Reading(view) => {
            render_reading(current_row, view, theme, cols, body_rows.saturating_sub(1));
        }
        Body::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
