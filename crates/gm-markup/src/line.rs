//! Rule line classification.
//!
//! A rule line is a run of at least three `-` (horizontal) or `+` (vertical)
//! characters, optionally decorated with strong emphasis (`**---**`), a code
//! span (`` `---` ``) or both (`` **`---`** ``). Rules are searched anywhere in
//! the text, so `intro --- outro` classifies as a plain horizontal rule.

use std::sync::LazyLock;

use regex::Regex;

use crate::alignment::Axis;

/// One of the eight rule variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineKind {
    pub axis: Axis,
    /// Wrapped in `**`.
    pub bold: bool,
    /// Wrapped in a code span.
    pub colored: bool,
}

impl LineKind {
    const fn new(axis: Axis, bold: bool, colored: bool) -> Self {
        Self {
            axis,
            bold,
            colored,
        }
    }

    /// Canonical HTML fragment for the rule.
    #[must_use]
    pub fn fragment(self) -> &'static str {
        match (self.axis, self.bold, self.colored) {
            (Axis::Horizontal, true, true) => "<strong><code><ins><hr></ins></code></strong>",
            (Axis::Vertical, true, true) => "<strong><code><mark><hr></mark></code></strong>",
            (Axis::Horizontal, true, false) => "<strong><ins><hr></ins></strong>",
            (Axis::Vertical, true, false) => "<strong><mark><hr></mark></strong>",
            (Axis::Horizontal, false, true) => "<code><ins><hr></ins></code>",
            (Axis::Vertical, false, true) => "<code><mark><hr></mark></code>",
            (Axis::Horizontal, false, false) => "<ins><hr></ins>",
            (Axis::Vertical, false, false) => "<mark><hr></mark>",
        }
    }
}

/// Rule patterns, most decorated first. The first match wins.
static LINE_RULES: LazyLock<[(LineKind, Regex); 8]> = LazyLock::new(|| {
    [
        (LineKind::new(Axis::Horizontal, true, true), r"\*\*`-{3,}`\*\*"),
        (LineKind::new(Axis::Vertical, true, true), r"\*\*`\+{3,}`\*\*"),
        (LineKind::new(Axis::Horizontal, true, false), r"\*\*-{3,}\*\*"),
        (LineKind::new(Axis::Vertical, true, false), r"\*\*\+{3,}\*\*"),
        (LineKind::new(Axis::Horizontal, false, true), r"`-{3,}`"),
        (LineKind::new(Axis::Vertical, false, true), r"`\+{3,}`"),
        (LineKind::new(Axis::Horizontal, false, false), r"-{3,}"),
        (LineKind::new(Axis::Vertical, false, false), r"\+{3,}"),
    ]
    .map(|(kind, pattern)| (kind, Regex::new(pattern).unwrap()))
});

/// Classify `text` as a rule line.
///
/// Returns `None` when no rule pattern matches, in which case the text should
/// be rendered as ordinary markdown.
///
/// # Examples
///
/// ```
/// use gm_markup::classify_line;
///
/// let kind = classify_line("**`+++`**").unwrap();
/// assert_eq!(kind.fragment(), "<strong><code><mark><hr></mark></code></strong>");
/// assert!(classify_line("plain text").is_none());
/// ```
pub fn classify_line(text: &str) -> Option<LineKind> {
    LINE_RULES
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(kind, _)| *kind)
}

/// Axis of an undecorated rule anywhere in `text`.
///
/// Decoration is ignored: `**---**` contains a bare horizontal run too.
pub fn bare_rule(text: &str) -> Option<Axis> {
    LINE_RULES[6..]
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(kind, _)| kind.axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fragment(text: &str) -> Option<&'static str> {
        classify_line(text).map(LineKind::fragment)
    }

    #[test]
    fn test_plain_rules() {
        assert_eq!(fragment("---"), Some("<ins><hr></ins>"));
        assert_eq!(fragment("+++"), Some("<mark><hr></mark>"));
        assert_eq!(fragment("----------"), Some("<ins><hr></ins>"));
    }

    #[test]
    fn test_two_chars_is_not_a_rule() {
        assert_eq!(fragment("--"), None);
        assert_eq!(fragment("++"), None);
        assert_eq!(fragment("- item"), None);
    }

    #[test]
    fn test_bold_rules() {
        assert_eq!(fragment("**---**"), Some("<strong><ins><hr></ins></strong>"));
        assert_eq!(fragment("**+++**"), Some("<strong><mark><hr></mark></strong>"));
    }

    #[test]
    fn test_colored_rules() {
        assert_eq!(fragment("`---`"), Some("<code><ins><hr></ins></code>"));
        assert_eq!(fragment("`++++`"), Some("<code><mark><hr></mark></code>"));
    }

    #[test]
    fn test_bold_colored_takes_precedence() {
        assert_eq!(
            fragment("**`+++`**"),
            Some("<strong><code><mark><hr></mark></code></strong>")
        );
        assert_eq!(
            fragment("**`---`**"),
            Some("<strong><code><ins><hr></ins></code></strong>")
        );
    }

    #[test]
    fn test_horizontal_wins_over_vertical_at_same_level() {
        assert_eq!(fragment("+++ ---"), Some("<ins><hr></ins>"));
    }

    #[test]
    fn test_rule_inside_text() {
        assert_eq!(fragment("before --- after"), Some("<ins><hr></ins>"));
    }

    #[test]
    fn test_bare_rule_ignores_decoration() {
        assert_eq!(bare_rule("---"), Some(Axis::Horizontal));
        assert_eq!(bare_rule("**`+++`**"), Some(Axis::Vertical));
        assert_eq!(bare_rule("**bold**"), None);
    }
}
