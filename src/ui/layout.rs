//! Section text layout.
//!
//! Turns formatted [`Block`]s into display lines wrapped to a column width.
//! Widths are measured in terminal cells, so Hangul and other wide characters
//! count as two columns.
//!
//! # Layout
//!
//! ```text
//! 1-3. 포상 개요            ← Title
//!                          ← Blank
//! 목적                      ← Heading
//! 모범적인 병사를 ...        ← Text
//!                          ← Blank
//! • 표창                    ← ListItem, prefix "• "
//!   이어지는 줄              ← ListItem continuation, prefix "  "
//! ```

use crate::content::Block;
use unicode_width::UnicodeWidthStr;

const BULLET: &str = "• ";

/// Role of a display line, used to pick its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Heading,
    Text,
    ListItem,
    Blank,
}

/// One wrapped display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub kind: LineKind,
    /// List marker on the first line of an item, matching indentation after it.
    pub prefix: String,
    pub text: String,
}

impl ContentLine {
    fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            prefix: String::new(),
            text: String::new(),
        }
    }

    /// Display width of prefix and text together.
    #[must_use]
    pub fn width(&self) -> usize {
        self.prefix.width() + self.text.width()
    }
}

/// Lays out a section title and its blocks for a text column `width` cells wide.
///
/// Blocks are separated by one blank line. No line is wider than `width`
/// unless a single character is.
#[must_use]
pub fn layout_section(title: &str, blocks: &[Block], width: usize) -> Vec<ContentLine> {
    let width = width.max(1);
    let mut lines = wrapped(LineKind::Title, title, width);

    for block in blocks {
        lines.push(ContentLine::blank());
        match block {
            Block::Header(text) => lines.extend(wrapped(LineKind::Heading, text, width)),
            Block::Paragraph { lines: paragraph } => {
                for line in paragraph {
                    lines.extend(wrapped(LineKind::Text, line, width));
                }
            }
            Block::UnorderedList(items) => {
                for item in items {
                    lines.extend(list_item(BULLET, item, width));
                }
            }
            Block::OrderedList(items) => {
                for (n, item) in items.iter().enumerate() {
                    lines.extend(list_item(&format!("{}. ", n + 1), item, width));
                }
            }
        }
    }

    lines
}

fn wrapped(kind: LineKind, text: &str, width: usize) -> Vec<ContentLine> {
    if text.is_empty() {
        return vec![ContentLine {
            kind,
            prefix: String::new(),
            text: String::new(),
        }];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(|line| ContentLine {
            kind,
            prefix: String::new(),
            text: line.into_owned(),
        })
        .collect()
}

fn list_item(marker: &str, text: &str, width: usize) -> Vec<ContentLine> {
    let marker_width = marker.width();
    let indent = " ".repeat(marker_width);
    let body_width = width.saturating_sub(marker_width).max(1);

    textwrap::wrap(text, body_width)
        .into_iter()
        .enumerate()
        .map(|(i, line)| ContentLine {
            kind: LineKind::ListItem,
            prefix: if i == 0 { marker.to_string() } else { indent.clone() },
            text: line.into_owned(),
        })
        .collect()
}
