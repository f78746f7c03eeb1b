//! Context snippets around search matches.
//!
//! A snippet is a window of section content around the first match, clipped to
//! the content bounds and marked with `...` where text was cut. Matches inside
//! the window are recorded as byte ranges into the snippet text, so callers
//! can paint them however they like: [`Snippet::to_html`] for markup,
//! [`Snippet::segments`] for terminal rendering.

use crate::content::markup::push_escaped;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

/// Marker placed where a snippet cuts content.
pub const ELLIPSIS: &str = "...";

/// Window sizes, all counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetConfig {
    /// Characters kept before the first match.
    pub before: usize,
    /// Characters kept after the end of the first match.
    pub after: usize,
    /// Characters shown when the content has no match (title-only hits).
    pub fallback_len: usize,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            before: 50,
            after: 100,
            fallback_len: 150,
        }
    }
}

/// A bounded excerpt with highlighted matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Plain excerpt, ellipses included.
    pub text: String,
    /// Byte ranges of matched text within `text`, ascending and disjoint.
    pub highlights: Vec<Range<usize>>,
}

impl Snippet {
    /// Renders the snippet as escaped HTML with every match wrapped in
    /// `<span class="highlight">`.
    ///
    /// ```
    /// use refdoc::search::Snippet;
    ///
    /// let snippet = Snippet { text: "a<PX>b".to_string(), highlights: vec![2..4] };
    /// assert_eq!(snippet.to_html(), r#"a&lt;<span class="highlight">PX</span>&gt;b"#);
    /// ```
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.text.len() + self.highlights.len() * 32);
        for (segment, highlighted) in self.segments() {
            if highlighted {
                html.push_str(r#"<span class="highlight">"#);
                push_escaped(&mut html, segment);
                html.push_str("</span>");
            } else {
                push_escaped(&mut html, segment);
            }
        }
        html
    }

    /// Splits the text into consecutive `(text, is_highlighted)` pieces.
    #[must_use]
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut segments = Vec::with_capacity(self.highlights.len() * 2 + 1);
        let mut cursor = 0;
        for range in &self.highlights {
            if range.start > cursor {
                segments.push((&self.text[cursor..range.start], false));
            }
            segments.push((&self.text[range.clone()], true));
            cursor = range.end;
        }
        if cursor < self.text.len() {
            segments.push((&self.text[cursor..], false));
        }
        segments
    }
}

/// Builds a snippet for `content` using `pattern` to locate matches.
///
/// Falls back to the leading characters of the content when the pattern does
/// not occur in it.
#[must_use]
pub fn extract(content: &str, pattern: &Regex, config: &SnippetConfig) -> Snippet {
    let Some(first) = pattern.find(content) else {
        return fallback(content, config);
    };

    let match_start = content[..first.start()].chars().count();
    let match_end = match_start + first.as_str().chars().count();
    let total = content.chars().count();

    let window_start = match_start.saturating_sub(config.before);
    let window_end = match_end.saturating_add(config.after).min(total);
    let window = &content[byte_offset(content, window_start)..byte_offset(content, window_end)];

    let mut text = String::with_capacity(window.len() + 2 * ELLIPSIS.len());
    if window_start > 0 {
        text.push_str(ELLIPSIS);
    }
    let shift = text.len();
    let highlights = pattern
        .find_iter(window)
        .filter(|m| !m.as_str().is_empty())
        .map(|m| m.start() + shift..m.end() + shift)
        .collect();
    text.push_str(window);
    if window_end < total {
        text.push_str(ELLIPSIS);
    }

    Snippet { text, highlights }
}

/// Leading characters of `content` followed by `...`, with no highlights.
#[must_use]
pub fn fallback(content: &str, config: &SnippetConfig) -> Snippet {
    let end = byte_offset(content, config.fallback_len);
    let mut text = String::with_capacity(end + ELLIPSIS.len());
    text.push_str(&content[..end]);
    text.push_str(ELLIPSIS);
    Snippet {
        text,
        highlights: Vec::new(),
    }
}

/// Byte offset of the `chars`-th character, or the length when past the end.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn pattern(query: &str) -> Regex {
        RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .unwrap()
    }

    fn highlighted(snippet: &Snippet) -> Vec<&str> {
        snippet
            .highlights
            .iter()
            .map(|r| &snippet.text[r.clone()])
            .collect()
    }

    #[test]
    fn test_short_content_has_no_ellipses() {
        let snippet = extract("우수 장병 포상 기준", &pattern("포상"), &SnippetConfig::default());
        assert_eq!(snippet.text, "우수 장병 포상 기준");
        assert_eq!(highlighted(&snippet), vec!["포상"]);
    }

    #[test]
    fn test_window_is_clipped_in_characters() {
        let config = SnippetConfig {
            before: 2,
            after: 3,
            fallback_len: 10,
        };
        let content = "가나다라마바사아자차카타파하";
        let snippet = extract(content, &pattern("마바"), &config);
        assert_eq!(snippet.text, "...다라마바사아자...");
        assert_eq!(highlighted(&snippet), vec!["마바"]);
    }

    #[test]
    fn test_every_occurrence_in_window_is_highlighted_case_insensitively() {
        let snippet = extract(
            "px hours. PX closes at 18:00. Px",
            &pattern("px"),
            &SnippetConfig::default(),
        );
        assert_eq!(highlighted(&snippet), vec!["px", "PX", "Px"]);
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let snippet = extract("PXA and PX. here", &pattern("PX."), &SnippetConfig::default());
        assert_eq!(highlighted(&snippet), vec!["PX."]);
    }

    #[test]
    fn test_fallback_always_appends_ellipsis() {
        let config = SnippetConfig {
            fallback_len: 3,
            ..SnippetConfig::default()
        };
        assert_eq!(fallback("가나다라", &config).text, "가나다...");
        assert_eq!(fallback("가", &config).text, "가...");
        assert_eq!(extract("nothing", &pattern("zz"), &config).text, "not...");
    }

    #[test]
    fn test_to_html_escapes_and_wraps() {
        let snippet = extract("<b>PX</b>", &pattern("px"), &SnippetConfig::default());
        assert_eq!(
            snippet.to_html(),
            r#"&lt;b&gt;<span class="highlight">PX</span>&lt;/b&gt;"#
        );
    }

    #[test]
    fn test_segments_cover_whole_text() {
        let snippet = extract("a PX b PX", &pattern("px"), &SnippetConfig::default());
        let joined: String = snippet.segments().iter().map(|(s, _)| *s).collect();
        assert_eq!(joined, snippet.text);
        assert_eq!(
            snippet.segments(),
            vec![("a ", false), ("PX", true), (" b ", false), ("PX", true)]
        );
    }
}
