//! Section text formatting.
//!
//! - [`formatter`]: plain text → [`Block`]s
//! - [`markup`]: [`Block`]s → escaped HTML

pub mod formatter;
pub mod markup;

pub use formatter::{
    format_content, format_optional, Block, FormatOptions, DEFAULT_HEADER_COLON_THRESHOLD,
    NO_CONTENT_PLACEHOLDER,
};
pub use markup::{blocks_to_html, escape_html};
