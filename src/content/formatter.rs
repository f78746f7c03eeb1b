//! Plain text to structured blocks.
//!
//! Section content is loosely structured: paragraphs separated by blank lines,
//! dash or bullet lists, numbered lists, and short `Label: text` lines. The
//! formatter recognizes those shapes and returns [`Block`]s for the renderer.
//!
//! # Classification
//!
//! Content is split on `\n\n`. Each paragraph candidate is trimmed and classified
//! on its own, first match wins:
//!
//! 1. starts with `-` or `•` → [`Block::UnorderedList`]
//! 2. starts with digits followed by `.` or `)` and whitespace → [`Block::OrderedList`]
//! 3. single line with a `:` before [`FormatOptions::header_colon_threshold`] →
//!    [`Block::Header`] followed by a [`Block::Paragraph`]
//! 4. anything else → [`Block::Paragraph`], one entry per line
//!
//! # Example
//!
//! ```rust
//! use refdoc::content::{format_content, Block, FormatOptions};
//!
//! let blocks = format_content("- a\n- b", &FormatOptions::default());
//! assert_eq!(blocks, vec![Block::UnorderedList(vec!["a".into(), "b".into()])]);
//! ```

/// Paragraph shown when a section has no content.
pub const NO_CONTENT_PLACEHOLDER: &str = "내용이 없습니다.";

/// Default character offset below which a `:` makes a line header-like.
pub const DEFAULT_HEADER_COLON_THRESHOLD: usize = 30;

/// A unit of formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Short heading taken from the left side of a `Label: text` line.
    Header(String),
    /// Paragraph text. Consecutive lines are separated by explicit line breaks,
    /// not by new paragraphs.
    Paragraph { lines: Vec<String> },
    /// Bullet list items with their markers removed.
    UnorderedList(Vec<String>),
    /// Numbered list items with their numbers removed.
    OrderedList(Vec<String>),
}

impl Block {
    /// Convenience constructor for a single-line paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            lines: vec![text.into()],
        }
    }
}

/// Tunable formatter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// A `:` at a character offset strictly below this value marks a
    /// header-like line.
    pub header_colon_threshold: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            header_colon_threshold: DEFAULT_HEADER_COLON_THRESHOLD,
        }
    }
}

/// Converts section content into blocks.
///
/// Pure and deterministic: the same input always yields the same blocks, in the
/// same order as the source paragraphs. Blank paragraph candidates produce no
/// block; if nothing is produced at all the placeholder paragraph is returned.
#[must_use]
pub fn format_content(content: &str, options: &FormatOptions) -> Vec<Block> {
    let blocks: Vec<Block> = content
        .split("\n\n")
        .filter(|candidate| !candidate.trim().is_empty())
        .flat_map(|candidate| classify(candidate, options))
        .collect();

    if blocks.is_empty() {
        vec![Block::paragraph(NO_CONTENT_PLACEHOLDER)]
    } else {
        blocks
    }
}

/// Like [`format_content`], for content that may be absent.
#[must_use]
pub fn format_optional(content: Option<&str>, options: &FormatOptions) -> Vec<Block> {
    format_content(content.unwrap_or_default(), options)
}

fn classify(candidate: &str, options: &FormatOptions) -> Vec<Block> {
    let trimmed = candidate.trim();

    if trimmed.starts_with('-') || trimmed.starts_with('•') {
        let items = list_items(trimmed, strip_bullet);
        return non_empty(items, Block::UnorderedList);
    }

    if numbered_prefix_len(trimmed).is_some() {
        let items = list_items(trimmed, strip_number);
        return non_empty(items, Block::OrderedList);
    }

    if !trimmed.contains('\n') {
        if let Some((header, rest)) = split_header(trimmed, options.header_colon_threshold) {
            return vec![Block::Header(header), Block::paragraph(rest)];
        }
    }

    vec![Block::Paragraph {
        lines: trimmed.lines().map(str::to_string).collect(),
    }]
}

/// Item text of each line, marker removed. Lines holding only a marker are skipped.
fn list_items(text: &str, strip: fn(&str) -> &str) -> Vec<String> {
    text.lines()
        .map(|line| strip(line.trim()).trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(items: Vec<String>, block: fn(Vec<String>) -> Block) -> Vec<Block> {
    if items.is_empty() {
        Vec::new()
    } else {
        vec![block(items)]
    }
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(['-', '•']).map_or(line, str::trim_start)
}

fn strip_number(line: &str) -> &str {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }
    line[digits..]
        .strip_prefix(['.', ')'])
        .map_or(line, str::trim_start)
}

/// Length of a `\d+[.)]\s` marker at the start of `text`, if present.
fn numbered_prefix_len(text: &str) -> Option<usize> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &text[digits..];
    let after_marker = rest.strip_prefix(['.', ')'])?;
    let whitespace = after_marker.chars().next().filter(|c| c.is_whitespace())?;
    Some(digits + 1 + whitespace.len_utf8())
}

fn split_header(text: &str, threshold: usize) -> Option<(String, String)> {
    let (byte_offset, char_offset) = text
        .char_indices()
        .enumerate()
        .find(|(_, (_, c))| *c == ':')
        .map(|(char_offset, (byte_offset, _))| (byte_offset, char_offset))?;

    if char_offset >= threshold {
        return None;
    }

    let header = text[..byte_offset].trim().to_string();
    let rest = text[byte_offset + 1..].trim().to_string();
    Some((header, rest))
}
