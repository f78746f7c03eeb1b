//! HTML rendering of formatted blocks.
//!
//! Every embedded string is escaped, so section text can never inject markup.

use crate::content::formatter::Block;

/// Escapes the five HTML-significant characters.
///
/// ```
/// use refdoc::content::escape_html;
///
/// assert_eq!(escape_html("<b>\"PX\" & 'BX'</b>"), "&lt;b&gt;&quot;PX&quot; &amp; &#39;BX&#39;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    push_escaped(&mut escaped, text);
    escaped
}

pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Renders blocks as an HTML fragment.
///
/// Headers become `<h4>`, paragraphs `<p>` with `<br>` between lines, and
/// lists `<ul>`/`<ol>`.
#[must_use]
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        match block {
            Block::Header(text) => {
                html.push_str("<h4>");
                push_escaped(&mut html, text);
                html.push_str("</h4>");
            }
            Block::Paragraph { lines } => {
                html.push_str("<p>");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        html.push_str("<br>");
                    }
                    push_escaped(&mut html, line);
                }
                html.push_str("</p>");
            }
            Block::UnorderedList(items) => push_list(&mut html, "ul", items),
            Block::OrderedList(items) => push_list(&mut html, "ol", items),
        }
    }
    html
}

fn push_list(html: &mut String, tag: &str, items: &[String]) {
    html.push('<');
    html.push_str(tag);
    html.push('>');
    for item in items {
        html.push_str("<li>");
        push_escaped(html, item);
        html.push_str("</li>");
    }
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{format_content, FormatOptions};

    #[test]
    fn test_renders_each_block_kind() {
        let blocks = format_content(
            "개요: 설명\n\n- 하나\n- 둘\n\n1) 가\n\n첫 줄\n둘째 줄",
            &FormatOptions::default(),
        );
        assert_eq!(
            blocks_to_html(&blocks),
            "<h4>개요</h4><p>설명</p><ul><li>하나</li><li>둘</li></ul>\
             <ol><li>가</li></ol><p>첫 줄<br>둘째 줄</p>"
        );
    }

    #[test]
    fn test_list_items_are_escaped() {
        let blocks = vec![Block::UnorderedList(vec!["<script>alert(1)</script>".into()])];
        assert_eq!(
            blocks_to_html(&blocks),
            "<ul><li>&lt;script&gt;alert(1)&lt;/script&gt;</li></ul>"
        );
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(blocks_to_html(&[]), "");
    }
}
