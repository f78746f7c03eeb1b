//! Search over the document.
//!
//! [`SearchEngine`] finds matching sections; [`snippet`] builds the
//! highlighted excerpt shown for each of them.

pub mod engine;
pub mod snippet;

pub use engine::{SearchEngine, SearchResult};
pub use snippet::{Snippet, SnippetConfig, ELLIPSIS};
