//! Bookmark domain model.
//!
//! A bookmark is a saved reference to one section, keyed by its position. The
//! serialized form uses camelCase keys so stored lists stay readable by other
//! tools working on the same data:
//!
//! ```json
//! { "id": "3-1", "chapterIndex": 3, "sectionIndex": 1, "title": "포상" }
//! ```

use serde::{Deserialize, Serialize};

/// Builds the bookmark id for a section position.
///
/// ```
/// use refdoc::domain::bookmark_id;
///
/// assert_eq!(bookmark_id(3, 1), "3-1");
/// ```
#[must_use]
pub fn bookmark_id(chapter: usize, section: usize) -> String {
    format!("{chapter}-{section}")
}

/// A saved reference to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// `"{chapter_index}-{section_index}"`, unique within a bookmark list.
    pub id: String,
    pub chapter_index: usize,
    pub section_index: usize,
    /// Section title captured when the bookmark was created. Never refreshed.
    pub title: String,
}

impl Bookmark {
    /// Creates a bookmark with its id derived from the position.
    pub fn new(chapter_index: usize, section_index: usize, title: impl Into<String>) -> Self {
        Self {
            id: bookmark_id(chapter_index, section_index),
            chapter_index,
            section_index,
            title: title.into(),
        }
    }
}
