//! Shared utility functions for markup rendering.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Escape text for inclusion in HTML content or attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Remove every `<...>` tag from an HTML fragment, keeping text and entities.
///
/// # Examples
///
/// ```
/// use gm_markup::strip_tags;
///
/// assert_eq!(strip_tags("<p><strong>Jane</strong> Doe</p>\n"), "Jane Doe\n");
/// ```
#[must_use]
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_strip_tags_keeps_entities() {
        assert_eq!(strip_tags("<p>a &amp; b</p>"), "a &amp; b");
    }

    #[test]
    fn test_strip_tags_void_and_attrs() {
        assert_eq!(
            strip_tags(r#"<img src="x.png" alt="y"><hr>text<br />"#),
            "text"
        );
    }

    #[test]
    fn test_strip_tags_plain_text() {
        assert_eq!(strip_tags("no tags at all"), "no tags at all");
    }
}
