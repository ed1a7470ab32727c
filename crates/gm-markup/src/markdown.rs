//! Generic markdown renderer.
//!
//! Walks pulldown-cmark events and writes HTML. Consecutive text events are
//! merged first so the [insert/mark extensions](crate::InlineExtensions) see
//! whole text runs, and markers left open by one run can be closed by a later
//! run of the same block. Block-level closing tags are followed by a newline so that
//! stripping the tags leaves one line per block.

use std::fmt::Write;

use pulldown_cmark::{
    Alignment as ColumnAlignment, CodeBlockKind, Event, Options, Parser, Tag, TagEnd,
    TextMergeStream,
};

use crate::inline::{InlineExtensions, OpenMarkers};
use crate::util::escape_html;

/// Collected state of the fenced or indented code block being rendered.
#[derive(Debug, Default)]
struct CodeBlockState {
    lang: Option<String>,
    content: String,
    active: bool,
}

/// Column alignments and cursor of the table being rendered.
#[derive(Debug, Default)]
struct TableState {
    alignments: Vec<ColumnAlignment>,
    cell: usize,
    in_head: bool,
}

impl TableState {
    fn cell_style(&self) -> &'static str {
        match self.alignments.get(self.cell) {
            Some(ColumnAlignment::Left) => r#" style="text-align: left""#,
            Some(ColumnAlignment::Center) => r#" style="text-align: center""#,
            Some(ColumnAlignment::Right) => r#" style="text-align: right""#,
            Some(ColumnAlignment::None) | None => "",
        }
    }

    fn cell_tag(&self) -> &'static str {
        if self.in_head { "th" } else { "td" }
    }
}

/// Alt text and target of the image being rendered.
#[derive(Debug, Default)]
struct ImageState {
    src: String,
    title: String,
    alt: String,
    depth: usize,
}

/// Markdown to HTML renderer.
///
/// GFM tables, strikethrough and task lists are enabled by default, as are
/// both inline extensions.
///
/// # Example
///
/// ```
/// use gm_markup::MarkdownRenderer;
///
/// let html = MarkdownRenderer::new().render_markdown("Knows ==Rust== and ++Go++");
/// assert_eq!(html, "<p>Knows <mark>Rust</mark> and <ins>Go</ins></p>\n");
/// ```
#[derive(Debug)]
pub struct MarkdownRenderer {
    output: String,
    gfm: bool,
    extensions: InlineExtensions,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    markers: OpenMarkers,
}

impl MarkdownRenderer {
    /// Create a renderer with GFM and both inline extensions enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(256),
            gfm: true,
            extensions: InlineExtensions::default(),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            markers: OpenMarkers::default(),
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Select the inline extensions.
    #[must_use]
    pub fn with_extensions(mut self, extensions: InlineExtensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }

    /// Render markdown text using the configured parser options.
    pub fn render_markdown(&mut self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        self.render(parser)
    }

    /// Render markdown events and return the HTML.
    pub fn render<'a, I>(&mut self, events: I) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in TextMergeStream::new(events) {
            self.process_event(event);
        }
        self.code = CodeBlockState::default();
        self.table = TableState::default();
        self.image = ImageState::default();
        self.markers = OpenMarkers::default();
        std::mem::take(&mut self.output)
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.output.push_str(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.output.push_str("<br>\n"),
            Event::Rule => self.output.push_str("<hr>\n"),
            Event::TaskListMarker(checked) => {
                let checked = if checked { " checked" } else { "" };
                write!(self.output, r#"<input type="checkbox" disabled{checked}> "#).unwrap();
            }
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        if self.image.depth > 0 {
            // Nested markup inside alt text contributes only its text.
            if matches!(tag, Tag::Image { .. }) {
                self.image.depth += 1;
            }
            return;
        }
        match tag {
            Tag::Emphasis
            | Tag::Strong
            | Tag::Strikethrough
            | Tag::Superscript
            | Tag::Subscript
            | Tag::Link { .. } => self.markers.enter(),
            Tag::Image { .. } => {}
            _ => self.markers.clear(),
        }
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => write!(self.output, "<{level}>").unwrap(),
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>\n"),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_owned),
                    CodeBlockKind::Indented => None,
                };
                self.code = CodeBlockState {
                    lang,
                    content: String::new(),
                    active: true,
                };
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>\n"),
                Some(n) => writeln!(self.output, "<ol start=\"{n}\">").unwrap(),
                None => self.output.push_str("<ul>\n"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => self.output.push_str("<dl>\n"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table = TableState {
                    alignments,
                    cell: 0,
                    in_head: false,
                };
                self.output.push_str("<table>\n");
            }
            Tag::TableHead => {
                self.table.in_head = true;
                self.table.cell = 0;
                self.output.push_str("<thead>\n<tr>\n");
            }
            Tag::TableRow => {
                self.table.cell = 0;
                self.output.push_str("<tr>\n");
            }
            Tag::TableCell => {
                let tag = self.table.cell_tag();
                let style = self.table.cell_style();
                write!(self.output, "<{tag}{style}>").unwrap();
            }
            Tag::Emphasis => self.output.push_str("<em>"),
            Tag::Strong => self.output.push_str("<strong>"),
            Tag::Strikethrough => self.output.push_str("<s>"),
            Tag::Superscript => self.output.push_str("<sup>"),
            Tag::Subscript => self.output.push_str("<sub>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                write!(self.output, r#"<a href="{}""#, escape_html(&dest_url)).unwrap();
                if !title.is_empty() {
                    write!(self.output, r#" title="{}""#, escape_html(&title)).unwrap();
                }
                self.output.push('>');
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image = ImageState {
                    src: dest_url.into_string(),
                    title: title.into_string(),
                    alt: String::new(),
                    depth: 1,
                };
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        if self.image.depth > 0 {
            if matches!(tag, TagEnd::Image) {
                self.image.depth -= 1;
                if self.image.depth == 0 {
                    self.finish_image();
                }
            }
            return;
        }
        match tag {
            TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::Superscript
            | TagEnd::Subscript
            | TagEnd::Link => self.markers.leave(),
            TagEnd::Image => {}
            _ => self.markers.clear(),
        }
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>\n"),
            TagEnd::Heading(level) => writeln!(self.output, "</{level}>").unwrap(),
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>\n"),
            TagEnd::CodeBlock => self.finish_code_block(),
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>\n" } else { "</ul>\n" });
            }
            TagEnd::Item => self.output.push_str("</li>\n"),
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::DefinitionList => self.output.push_str("</dl>\n"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>\n"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>\n"),
            TagEnd::Table => self.output.push_str("</tbody>\n</table>\n"),
            TagEnd::TableHead => {
                self.table.in_head = false;
                self.output.push_str("</tr>\n</thead>\n<tbody>\n");
            }
            TagEnd::TableRow => self.output.push_str("</tr>\n"),
            TagEnd::TableCell => {
                writeln!(self.output, "</{}>", self.table.cell_tag()).unwrap();
                self.table.cell += 1;
            }
            TagEnd::Emphasis => self.output.push_str("</em>"),
            TagEnd::Strong => self.output.push_str("</strong>"),
            TagEnd::Strikethrough => self.output.push_str("</s>"),
            TagEnd::Superscript => self.output.push_str("</sup>"),
            TagEnd::Subscript => self.output.push_str("</sub>"),
            TagEnd::Link => self.output.push_str("</a>"),
            TagEnd::Image => {}
        }
    }

    fn finish_code_block(&mut self) {
        let code = std::mem::take(&mut self.code);
        match code.lang {
            Some(lang) => write!(
                self.output,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(&lang),
                escape_html(&code.content)
            )
            .unwrap(),
            None => write!(
                self.output,
                "<pre><code>{}</code></pre>",
                escape_html(&code.content)
            )
            .unwrap(),
        }
        self.output.push('\n');
    }

    fn finish_image(&mut self) {
        let image = std::mem::take(&mut self.image);
        write!(
            self.output,
            r#"<img src="{}" alt="{}""#,
            escape_html(&image.src),
            escape_html(&image.alt)
        )
        .unwrap();
        if !image.title.is_empty() {
            write!(self.output, r#" title="{}""#, escape_html(&image.title)).unwrap();
        }
        self.output.push('>');
    }

    fn text(&mut self, text: &str) {
        if self.code.active {
            self.code.content.push_str(text);
        } else if self.image.depth > 0 {
            self.image.alt.push_str(text);
        } else {
            self.extensions
                .render_run(text, &mut self.output, &mut self.markers);
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.image.depth > 0 {
            self.image.alt.push_str(code);
        } else {
            write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
        }
    }

    fn soft_break(&mut self) {
        if self.image.depth > 0 {
            self.image.alt.push(' ');
        } else {
            self.output.push('\n');
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
