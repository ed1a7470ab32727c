//! Insert and mark inline extensions.
//!
//! pulldown-cmark has no syntax for `<ins>` and `<mark>`, so text runs are
//! scanned after parsing:
//!
//! - `++text++` renders as `<ins>text</ins>`
//! - `==text==` renders as `<mark>text</mark>`
//!
//! The enclosed text must not start or end with whitespace and may nest the
//! other marker. A marker left open at the end of a text run can be closed by
//! a later run at the same inline depth, so `==a **b** c==` marks the whole
//! span.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::util::escape_html;

static INLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+\+(?P<ins>[^\s+](?:[^\n]*?[^\s+])?)\+\+|==(?P<mark>[^\s=](?:[^\n]*?[^\s=])?)==")
        .unwrap()
});

/// Which inline extensions are active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InlineExtensions {
    /// `++text++` to `<ins>`.
    pub insert: bool,
    /// `==text==` to `<mark>`.
    pub mark: bool,
}

impl Default for InlineExtensions {
    fn default() -> Self {
        Self {
            insert: true,
            mark: true,
        }
    }
}

impl InlineExtensions {
    /// Both extensions disabled.
    #[must_use]
    pub fn none() -> Self {
        Self {
            insert: false,
            mark: false,
        }
    }

    fn any(self) -> bool {
        self.insert || self.mark
    }

    fn delimiters(self) -> impl Iterator<Item = (&'static str, &'static str)> {
        [("ins", "++", self.insert), ("mark", "==", self.mark)]
            .into_iter()
            .filter_map(|(tag, delim, enabled)| enabled.then_some((tag, delim)))
    }

    /// Render one text run of an inline container, closing a marker opened by
    /// an earlier run and leaving an unmatched opener for later runs.
    pub(crate) fn render_run(self, text: &str, out: &mut String, open: &mut OpenMarkers) {
        if !self.any() {
            out.push_str(&escape_html(text));
            return;
        }

        let mut rest = text;
        if let Some(top) = open.top() {
            let covered = self.matched_ranges(rest);
            if let Some(pos) = closer_at(rest, top.delim, &covered) {
                self.render(&rest[..pos], out);
                open.close(out);
                rest = &rest[pos + top.delim.len()..];
            }
        }

        let covered = self.matched_ranges(rest);
        let opener = self
            .delimiters()
            .filter_map(|(tag, delim)| opener_at(rest, delim, &covered).map(|pos| (pos, tag, delim)))
            .min_by_key(|(pos, _, _)| *pos);
        match opener {
            Some((pos, tag, delim)) => {
                self.render(&rest[..pos], out);
                open.push(tag, delim, out);
                self.render(&rest[pos + delim.len()..], out);
            }
            None => self.render(rest, out),
        }
    }

    /// Byte ranges of `text` consumed by enabled, fully enclosed markers.
    fn matched_ranges(self, text: &str) -> Vec<Range<usize>> {
        INLINE_RE
            .captures_iter(text)
            .filter(|caps| self.enabled_match(caps).is_some())
            .filter_map(|caps| caps.get(0))
            .map(|m| m.range())
            .collect()
    }

    /// Escape `text` and expand enabled extension markers into HTML.
    pub(crate) fn render(self, text: &str, out: &mut String) {
        if !self.any() {
            out.push_str(&escape_html(text));
            return;
        }

        let mut last = 0;
        for caps in INLINE_RE.captures_iter(text) {
            let Some((tag, inner)) = self.enabled_match(&caps) else {
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&escape_html(&text[last..whole.start()]));
            out.push('<');
            out.push_str(tag);
            out.push('>');
            self.render(inner, out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
            last = whole.end();
        }
        out.push_str(&escape_html(&text[last..]));
    }

    fn enabled_match<'t>(self, caps: &Captures<'t>) -> Option<(&'static str, &'t str)> {
        if let Some(inner) = caps.name("ins") {
            return self.insert.then_some(("ins", inner.as_str()));
        }
        let inner = caps.name("mark")?;
        self.mark.then_some(("mark", inner.as_str()))
    }
}

/// Marker opened in one text run and not yet closed.
#[derive(Clone, Copy, Debug)]
struct OpenMarker {
    tag: &'static str,
    delim: &'static str,
    /// Byte offset of the literal delimiter in the output.
    at: usize,
    depth: usize,
}

/// Markers waiting for a closer, tracked across the text runs of a block.
///
/// The opener is written literally and rewritten to a start tag when a later
/// run at the same inline depth closes it. Leaving the element it was opened
/// in, or the enclosing block, abandons the opener and the literal stays.
#[derive(Debug, Default)]
pub(crate) struct OpenMarkers {
    open: Vec<OpenMarker>,
    depth: usize,
}

impl OpenMarkers {
    /// An inline element (emphasis, link, ...) starts.
    pub(crate) fn enter(&mut self) {
        self.depth += 1;
    }

    /// An inline element ends.
    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        let depth = self.depth;
        self.open.retain(|marker| marker.depth <= depth);
    }

    /// A block starts or ends.
    pub(crate) fn clear(&mut self) {
        self.open.clear();
        self.depth = 0;
    }

    fn top(&self) -> Option<OpenMarker> {
        self.open
            .last()
            .copied()
            .filter(|marker| marker.depth == self.depth)
    }

    fn push(&mut self, tag: &'static str, delim: &'static str, out: &mut String) {
        self.open.push(OpenMarker {
            tag,
            delim,
            at: out.len(),
            depth: self.depth,
        });
        out.push_str(delim);
    }

    fn close(&mut self, out: &mut String) {
        let Some(marker) = self.open.pop() else {
            return;
        };
        out.replace_range(
            marker.at..marker.at + marker.delim.len(),
            &format!("<{}>", marker.tag),
        );
        out.push_str("</");
        out.push_str(marker.tag);
        out.push('>');
    }
}

/// Positions of `delim` in `text` outside already matched spans.
fn free_delimiters<'a>(
    text: &'a str,
    delim: &'a str,
    covered: &'a [Range<usize>],
) -> impl Iterator<Item = usize> + 'a {
    text.match_indices(delim)
        .map(|(pos, _)| pos)
        .filter(|pos| !covered.iter().any(|range| range.contains(pos)))
}

fn neighbours(text: &str, pos: usize, delim: &str) -> (Option<char>, Option<char>) {
    let before = text[..pos].chars().next_back();
    let after = text[pos + delim.len()..].chars().next();
    (before, after)
}

/// First delimiter that can close a span: not preceded by whitespace.
fn closer_at(text: &str, delim: &str, covered: &[Range<usize>]) -> Option<usize> {
    free_delimiters(text, delim, covered).find(|&pos| {
        let (before, after) = neighbours(text, pos, delim);
        before.is_none_or(|c| !c.is_whitespace() && !delim.starts_with(c))
            && after.is_none_or(|c| !delim.starts_with(c))
    })
}

/// First delimiter that can open a span: not followed by whitespace.
fn opener_at(text: &str, delim: &str, covered: &[Range<usize>]) -> Option<usize> {
    free_delimiters(text, delim, covered).find(|&pos| {
        let (before, after) = neighbours(text, pos, delim);
        before.is_none_or(|c| !delim.starts_with(c))
            && after.is_none_or(|c| !c.is_whitespace() && !delim.starts_with(c))
    })
}
