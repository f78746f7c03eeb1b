//! Search bar: a three-row box holding the query and a focus hint.
//!
//! ```text
//!      ┌────────────────────────────────────┐
//!      │ 검색: 포상▏              Enter 검색 │
//!      └────────────────────────────────────┘
//! ```
//!
//! While focus is on the result list the border is dimmed, the cursor is
//! hidden and the hint switches to how to get back to the query.

use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 5;
const PROMPT: &str = " 검색: ";
const CURSOR: &str = "▏";
const HINT_EDITING: &str = "Enter 검색 ";
const HINT_BROWSING: &str = "/ 수정 ";

fn render_edge(row: usize, left: char, right: char, inner_width: usize, color: &str) {
    position_cursor(row, 1);
    print!(
        "{margin}{color}{left}{line}{right}{reset}",
        margin = " ".repeat(SEARCH_BOX_MARGIN),
        color = Theme::fg(color),
        line = "─".repeat(inner_width),
        reset = Theme::reset(),
    );
}

/// Renders the search box at `row` and returns the row below it.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let (border_color, hint) = if search.is_editing {
        (&theme.colors.search_bar_border, HINT_EDITING)
    } else {
        (&theme.colors.border, HINT_BROWSING)
    };

    let cursor = if search.is_editing { CURSOR } else { "" };
    let query = truncate_to_width(&format!("{PROMPT}{}{cursor}", search.query), inner_width);
    let used = display_width(&query);
    // The hint only shows when it fits beside the query with a gap.
    let hint = if used + display_width(hint) < inner_width { hint } else { "" };
    let gap = inner_width.saturating_sub(used + display_width(hint));

    render_edge(row, '┌', '┐', inner_width, border_color);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}│", Theme::fg(border_color));
    print!("{}{query}", Theme::fg(&theme.colors.text_normal));
    print!("{}", " ".repeat(gap));
    print!("{}{hint}", Theme::fg(&theme.colors.text_dim));
    print!("{}│{}", Theme::fg(border_color), Theme::reset());

    render_edge(row + 2, '└', '┘', inner_width, border_color);

    row + 3
}
