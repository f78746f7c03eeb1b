//! Full-text search over the document.

use crate::domain::Document;
use crate::search::snippet::{self, Snippet, SnippetConfig};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// One matching section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub chapter_index: usize,
    pub section_index: usize,
    pub chapter_title: String,
    pub section_title: String,
    pub snippet: Snippet,
}

/// Case-insensitive substring search in document order.
///
/// ```
/// use refdoc::domain::Document;
/// use refdoc::search::SearchEngine;
///
/// let doc = Document::from_json(
///     r#"[{"title": "복지", "sections": [{"title": "PX", "content": "PX 이용 시간"}]}]"#,
/// ).unwrap();
/// let results = SearchEngine::default().search(&doc, "  px ");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].section_title, "PX");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine {
    snippet: SnippetConfig,
}

impl SearchEngine {
    #[must_use]
    pub const fn new(snippet: SnippetConfig) -> Self {
        Self { snippet }
    }

    /// Returns every section whose title or content contains `query`.
    ///
    /// The query is trimmed and compared case-insensitively; a blank query
    /// yields no results. Results follow chapter then section order.
    #[must_use]
    pub fn search(&self, document: &Document, query: &str) -> Vec<SearchResult> {
        let needle = query.trim();
        let _span = tracing::debug_span!("search", query = %needle).entered();

        if needle.is_empty() {
            tracing::debug!("blank query");
            return Vec::new();
        }

        let Some(pattern) = query_pattern(needle) else {
            return Vec::new();
        };

        let results: Vec<SearchResult> = document
            .chapters()
            .iter()
            .flat_map(|chapter| {
                chapter
                    .sections
                    .iter()
                    .map(move |section| (chapter, section))
            })
            // Membership and highlighting share one matcher, so a content
            // match always gets a highlighted snippet.
            .filter(|(_, section)| {
                pattern.is_match(&section.title) || pattern.is_match(&section.content)
            })
            .map(|(chapter, section)| SearchResult {
                chapter_index: chapter.index,
                section_index: section.index,
                chapter_title: chapter.title.clone(),
                section_title: section.title.clone(),
                snippet: snippet::extract(&section.content, &pattern, &self.snippet),
            })
            .collect();

        tracing::debug!(result_count = results.len(), "search complete");
        results
    }
}

/// Case-insensitive literal matcher for `needle`.
///
/// An escaped literal only fails to compile past the regex size limit, in
/// which case nothing can match.
fn query_pattern(needle: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::warn!(error = %e, "failed to build search pattern");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"[
        {
            "title": "제1장 인사",
            "sections": [
                { "title": "포상 기준", "content": "모범 장병은 심사를 거친다." },
                { "title": "징계", "content": "징계 절차를 따른다." },
                { "title": "휴가", "content": "포상 휴가는 최대 5일이다." }
            ]
        },
        {
            "title": "제2장 복지",
            "sections": [
                { "title": "PX", "content": "PX. 운영 시간은 09:00부터이다. PXA는 별도 시설이다." },
                { "title": "체육", "content": "체육 시설에서 포상 행사를 연다." }
            ]
        }
    ]"#;

    fn doc() -> Document {
        Document::from_json(SOURCE).unwrap()
    }

    fn positions(results: &[SearchResult]) -> Vec<(usize, usize)> {
        results
            .iter()
            .map(|r| (r.chapter_index, r.section_index))
            .collect()
    }

    #[test]
    fn test_results_are_in_document_order() {
        let results = SearchEngine::default().search(&doc(), "포상");
        assert_eq!(positions(&results), vec![(0, 0), (0, 2), (1, 1)]);
        assert_eq!(results[2].chapter_title, "제2장 복지");
        assert_eq!(results[2].section_title, "체육");
    }

    #[test]
    fn test_title_only_match_uses_fallback_snippet() {
        let results = SearchEngine::default().search(&doc(), "포상");
        let title_only = &results[0];
        assert_eq!(title_only.snippet.text, "모범 장병은 심사를 거친다....");
        assert!(title_only.snippet.highlights.is_empty());
    }

    #[test]
    fn test_content_match_highlights_query() {
        let results = SearchEngine::default().search(&doc(), "포상");
        let snippet = &results[1].snippet;
        assert_eq!(snippet.text, "포상 휴가는 최대 5일이다.");
        assert_eq!(&snippet.text[snippet.highlights[0].clone()], "포상");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let results = SearchEngine::default().search(&doc(), "PX.");
        assert_eq!(positions(&results), vec![(1, 0)]);
        let snippet = &results[0].snippet;
        let matched: Vec<&str> = snippet
            .highlights
            .iter()
            .map(|r| &snippet.text[r.clone()])
            .collect();
        assert_eq!(matched, vec!["PX."]);
    }

    #[test]
    fn test_blank_query_is_empty() {
        assert!(SearchEngine::default().search(&doc(), "").is_empty());
        assert!(SearchEngine::default().search(&doc(), "   ").is_empty());
    }

    #[test]
    fn test_case_insensitive_match() {
        let results = SearchEngine::default().search(&doc(), "pxa");
        assert_eq!(positions(&results), vec![(1, 0)]);
    }

    #[test]
    fn test_content_match_is_never_title_only() {
        let doc = Document::from_json(
            r#"[{"title": "여행", "sections": [{"title": "도시", "content": "abc İstanbul def"}]}]"#,
        )
        .unwrap();
        let engine = SearchEngine::default();
        assert_eq!(positions(&engine.search(&doc, "İSTANBUL")), vec![(0, 0)]);

        for query in ["istanbul", "İSTANBUL", "i̇stanbul"] {
            for result in engine.search(&doc, query) {
                let snippet = &result.snippet;
                assert!(!snippet.highlights.is_empty(), "{query}: {snippet:?}");
                assert_eq!(snippet.text, "abc İstanbul def");
            }
        }
    }

    #[test]
    fn test_no_match() {
        assert!(SearchEngine::default().search(&doc(), "없는단어").is_empty());
    }
}
