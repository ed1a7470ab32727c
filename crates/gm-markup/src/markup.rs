//! Directive-aware markup rendering for layout items.
//!
//! Both variants strip alignment directives first. The HTML variant then
//! replaces rule lines with a canonical fragment and renders everything else
//! as markdown; the plain-text variant keeps rule lines as their source marker
//! and strips the tags from rendered markdown.

use crate::alignment::Alignment;
use crate::directive::extract_directives;
use crate::inline::InlineExtensions;
use crate::line::{bare_rule, classify_line};
use crate::markdown::MarkdownRenderer;
use crate::util::strip_tags;

/// Rendered content together with the alignment collected from directives.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rendered {
    /// HTML fragment or plain text, depending on the variant.
    pub content: String,
    pub align: Alignment,
}

/// Renders item markup with a fixed set of markdown options.
///
/// # Example
///
/// ```
/// use gm_markup::MarkupRenderer;
///
/// let renderer = MarkupRenderer::new();
/// let rendered = renderer.render_html("[-C]**Jane Doe**");
/// assert_eq!(rendered.content, "<p><strong>Jane Doe</strong></p>\n");
/// assert!(rendered.align.h_center);
///
/// let rendered = renderer.render_plain("[+S]---");
/// assert_eq!(rendered.content, "---");
/// assert!(rendered.align.v_start);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MarkupRenderer {
    gfm: bool,
    extensions: InlineExtensions,
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self {
            gfm: true,
            extensions: InlineExtensions::default(),
        }
    }
}

impl MarkupRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Select the insert/mark inline extensions.
    #[must_use]
    pub fn with_extensions(mut self, extensions: InlineExtensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Render `text` to an HTML fragment.
    ///
    /// A bare rule such as `---` resolves to its plain fragment; decorated
    /// rules take precedence over it. Anything else is rendered as markdown.
    pub fn render_html(&self, text: &str) -> Rendered {
        let (value, align) = extract_directives(text);

        let content = if let Some(kind) = classify_line(&value) {
            tracing::debug!(?kind, "rendering rule line");
            kind.fragment().to_owned()
        } else {
            self.markdown(&value)
        };

        Rendered { content, align }
    }

    /// Render `text` to plain text.
    ///
    /// Text containing a rule yields the literal `---` or `+++` marker so the
    /// source form can be edited again; anything else is rendered and its tags
    /// stripped.
    pub fn render_plain(&self, text: &str) -> Rendered {
        let (value, align) = extract_directives(text);

        let content = match bare_rule(&value) {
            Some(axis) => axis.marker().to_owned(),
            None => strip_tags(&self.markdown(&value)),
        };

        Rendered { content, align }
    }

    fn markdown(&self, value: &str) -> String {
        MarkdownRenderer::new()
            .with_gfm(self.gfm)
            .with_extensions(self.extensions)
            .render_markdown(value)
    }
}

/// Render `text` to HTML with default options.
pub fn render_html(text: &str) -> Rendered {
    MarkupRenderer::default().render_html(text)
}

/// Render `text` to plain text with default options.
pub fn render_plain(text: &str) -> Rendered {
    MarkupRenderer::default().render_plain(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_html_bare_horizontal_rule() {
        let rendered = render_html("---");
        assert_eq!(rendered.content, "<ins><hr></ins>");
        assert!(rendered.align.is_empty());
    }

    #[test]
    fn test_plain_bare_horizontal_rule() {
        assert_eq!(render_plain("---").content, "---");
        assert_eq!(render_plain("+++").content, "+++");
    }

    #[test]
    fn test_html_bold_colored_vertical_rule() {
        assert_eq!(
            render_html("**`+++`**").content,
            "<strong><code><mark><hr></mark></code></strong>"
        );
    }

    #[test]
    fn test_plain_decorated_rule_keeps_bare_marker() {
        assert_eq!(render_plain("**`+++`**").content, "+++");
    }

    #[test]
    fn test_directives_stripped_before_classification() {
        let rendered = render_html("[-S]-[+E]--");
        assert_eq!(rendered.content, "<ins><hr></ins>");
        assert!(rendered.align.h_start);
        assert!(rendered.align.v_end);
    }

    #[test]
    fn test_html_markdown_fallback() {
        let rendered = render_html("[-E]## Skills\n\n- ==Rust==\n- ++Go++");
        assert_eq!(
            rendered.content,
            "<h2>Skills</h2>\n<ul>\n<li><mark>Rust</mark></li>\n<li><ins>Go</ins></li>\n</ul>\n"
        );
        assert!(rendered.align.h_end);
    }

    #[test]
    fn test_plain_strips_tags() {
        let rendered = render_plain("[+c]**Jane** *Doe*\n\nEngineer");
        assert_eq!(rendered.content, "Jane Doe\nEngineer\n");
        assert!(rendered.align.v_center);
    }

    #[test]
    fn test_plain_matches_stripped_html() {
        for text in [
            "**bold** and _em_",
            "# Title\n\nbody ==hl== ++ins++",
            "- a\n- b\n\n1. c",
            "> quote with `code`",
        ] {
            assert_eq!(
                strip_tags(&render_html(text).content),
                render_plain(text).content,
                "input: {text:?}"
            );
        }
    }

    #[test]
    fn test_empty_text() {
        let rendered = render_html("");
        assert_eq!(rendered.content, "");
        assert!(rendered.align.is_empty());
    }

    #[test]
    fn test_extensions_disabled() {
        let renderer = MarkupRenderer::new().with_extensions(InlineExtensions::none());
        assert_eq!(renderer.render_html("==x==").content, "<p>==x==</p>\n");
    }
}
