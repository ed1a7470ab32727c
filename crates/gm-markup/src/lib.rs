//! Directive-annotated markdown pipeline for grid layout items.
//!
//! Item content is markdown with two additions:
//!
//! - **Alignment directives**: four-character tokens such as `[-C]` (center
//!   horizontally) or `[+E]` (align to the vertical end). They are stripped
//!   from the text and returned as an [`Alignment`].
//! - **Rule lines**: runs like `---` or `+++`, optionally bold (`**---**`)
//!   and/or colored (`` `---` ``), which render as canonical `<hr>` fragments
//!   instead of going through markdown.
//!
//! # Architecture
//!
//! - [`extract_directives`]: strips directive tokens and collects flags
//! - [`classify_line`]: ordered rule-pattern table, most decorated first
//! - [`MarkdownRenderer`]: pulldown-cmark event renderer with the
//!   [`InlineExtensions`] `++insert++` and `==mark==`
//! - [`MarkupRenderer`]: ties the three together, producing HTML for display
//!   or plain text for export
//!
//! # Example
//!
//! ```
//! use gm_markup::{render_html, render_plain};
//!
//! let rendered = render_html("[-C][+S]**`---`**");
//! assert_eq!(rendered.content, "<strong><code><ins><hr></ins></code></strong>");
//! assert!(rendered.align.h_center && rendered.align.v_start);
//!
//! assert_eq!(render_plain("**Jane** Doe").content, "Jane Doe\n");
//! ```

mod alignment;
mod directive;
mod inline;
mod line;
mod markdown;
mod markup;
mod util;

pub use alignment::{Alignment, Axis, Placement};
pub use directive::extract_directives;
pub use inline::InlineExtensions;
pub use line::{LineKind, bare_rule, classify_line};
pub use markdown::MarkdownRenderer;
pub use markup::{MarkupRenderer, Rendered, render_html, render_plain};
pub use util::{escape_html, strip_tags};
