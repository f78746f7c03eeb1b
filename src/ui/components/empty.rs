//! Empty state component renderer.

use crate::ui::helpers::{centered_padding, display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting two rows below `row`.
///
/// Shown for a search without matches and for an empty bookmark list. The
/// message uses `empty_state_fg`, the subtitle is dimmed.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate_to_width(&empty.message, cols);
    let msg_padding = centered_padding(&message, cols);

    position_cursor(row + 2, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + display_width(&message))));
    print!("{}", Theme::reset());

    let subtitle = truncate_to_width(&empty.subtitle, cols);
    let sub_padding = centered_padding(&subtitle, cols);

    position_cursor(row + 3, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + display_width(&subtitle))));
    print!("{}", Theme::reset());
}
