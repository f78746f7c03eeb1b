//! Document model: the chapter/section tree.
//!
//! The document is loaded once at startup and never mutated. Chapter and section
//! indices are positional: the loader assigns them from the order of the source
//! array, so `chapters()[i].index == i` and `sections()[j].index == j` always hold.
//!
//! # Source Format
//!
//! ```json
//! [
//!   {
//!     "title": "제1장 총칙",
//!     "description": "규정의 목적",
//!     "icon": "📋",
//!     "sections": [
//!       { "title": "1-1. 목적", "content": "이 규정은 ..." }
//!     ]
//!   }
//! ]
//! ```
//!
//! `description` and `icon` are optional. A section whose `content` is missing or
//! `null` is loaded with empty content.

use crate::domain::error::{Result, ViewerError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawChapter {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    title: String,
    #[serde(default)]
    content: Option<String>,
}

/// A leaf content unit within a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Position within the owning chapter.
    pub index: usize,
    pub title: String,
    /// Raw text using `\n` for line breaks and `\n\n` between paragraphs.
    pub content: String,
}

/// A top-level grouping of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Position within the document.
    pub index: usize,
    pub title: String,
    /// One-line summary shown under the chapter title.
    pub description: String,
    /// Optional icon shown in chapter lists.
    pub icon: Option<String>,
    pub sections: Vec<Section>,
}

impl Chapter {
    /// Returns the title with any parenthesised part removed.
    ///
    /// Used for compact chapter lists where `"제3장 인사관리 (Personnel)"` reads
    /// better as `"제3장 인사관리"`.
    ///
    /// ```
    /// use refdoc::domain::Chapter;
    ///
    /// let chapter = Chapter {
    ///     index: 0,
    ///     title: "제3장 인사관리 (Personnel)".to_string(),
    ///     description: String::new(),
    ///     icon: None,
    ///     sections: vec![],
    /// };
    /// assert_eq!(chapter.short_title(), "제3장 인사관리");
    /// ```
    #[must_use]
    pub fn short_title(&self) -> String {
        match (self.title.find('('), self.title.rfind(')')) {
            (Some(open), Some(close)) if open < close => {
                let mut short = String::with_capacity(self.title.len());
                short.push_str(&self.title[..open]);
                short.push_str(&self.title[close + 1..]);
                short.trim().to_string()
            }
            _ => self.title.trim().to_string(),
        }
    }

    /// Returns the section at `index`, if it exists.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }
}

/// The complete, immutable reference document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    chapters: Vec<Chapter>,
}

impl Document {
    /// Parses a document from its JSON source.
    ///
    /// # Errors
    ///
    /// - [`ViewerError::Document`] if the JSON is malformed
    /// - [`ViewerError::EmptyDocument`] if the source is `null` or has no chapters
    pub fn from_json(source: &str) -> Result<Self> {
        let _span = tracing::debug_span!("document_from_json", source_len = source.len()).entered();

        let raw: Option<Vec<RawChapter>> = serde_json::from_str(source)
            .map_err(|e| ViewerError::Document(format!("failed to parse document: {e}")))?;

        let chapters = raw
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, chapter)| Chapter {
                index,
                title: chapter.title,
                description: chapter.description.unwrap_or_default(),
                icon: chapter.icon.filter(|icon| !icon.trim().is_empty()),
                sections: chapter
                    .sections
                    .into_iter()
                    .enumerate()
                    .map(|(index, section)| Section {
                        index,
                        title: section.title,
                        content: section.content.unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect();

        Self::new(chapters)
    }

    /// Reads and parses a document file.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Io`] if the file cannot be read, otherwise the same
    /// errors as [`Document::from_json`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading document file");
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Builds a document from already-indexed chapters.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::EmptyDocument`] if `chapters` is empty, or
    /// [`ViewerError::Document`] if any index does not match its position.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self> {
        if chapters.is_empty() {
            return Err(ViewerError::EmptyDocument);
        }

        for (position, chapter) in chapters.iter().enumerate() {
            if chapter.index != position {
                return Err(ViewerError::Document(format!(
                    "chapter at position {position} has index {}",
                    chapter.index
                )));
            }
            if let Some((position, section)) = chapter
                .sections
                .iter()
                .enumerate()
                .find(|(position, section)| section.index != *position)
            {
                return Err(ViewerError::Document(format!(
                    "section at position {position} of chapter {} has index {}",
                    chapter.index, section.index
                )));
            }
        }

        tracing::debug!(
            chapter_count = chapters.len(),
            section_count = chapters.iter().map(|c| c.sections.len()).sum::<usize>(),
            "document loaded"
        );

        Ok(Self { chapters })
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    #[must_use]
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// Looks up a section by chapter and section index.
    #[must_use]
    pub fn section(&self, chapter: usize, section: usize) -> Option<&Section> {
        self.chapter(chapter).and_then(|c| c.section(section))
    }

    /// Total number of sections across all chapters.
    #[must_use]
    pub fn total_sections(&self) -> usize {
        self.chapters.iter().map(|c| c.sections.len()).sum()
    }
}
