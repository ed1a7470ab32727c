//! Render and plain commands.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use gm_markup::{InlineExtensions, MarkupRenderer, Rendered};

use crate::error::CliError;
use crate::output::Output;

/// Output flavor for rendered markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderMode {
    Html,
    Plain,
}

/// Arguments shared by the render and plain commands.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markup to render. Read from stdin when neither this nor --file is given.
    text: Option<String>,

    /// Read markup from a file.
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Print content and alignment flags as JSON.
    #[arg(long)]
    json: bool,

    /// Disable `++insert++` and `==mark==` syntax.
    #[arg(long)]
    no_extensions: bool,

    /// Disable GitHub-flavored tables, strikethrough and task lists.
    #[arg(long)]
    no_gfm: bool,
}

impl RenderArgs {
    /// Execute the command.
    pub(crate) fn execute(self, mode: RenderMode) -> Result<(), CliError> {
        let text = self.read_input(std::io::stdin())?;
        let rendered = self.render(&text, mode);
        tracing::info!(?mode, bytes = text.len(), align = ?rendered.align, "rendered markup");

        let output = Output::new();
        if self.json {
            output.result(&serde_json::to_string(&rendered)?);
        } else {
            output.result(&rendered.content);
        }
        Ok(())
    }

    fn renderer(&self) -> MarkupRenderer {
        let extensions = if self.no_extensions {
            InlineExtensions::none()
        } else {
            InlineExtensions::default()
        };
        MarkupRenderer::new()
            .with_gfm(!self.no_gfm)
            .with_extensions(extensions)
    }

    fn render(&self, text: &str, mode: RenderMode) -> Rendered {
        let renderer = self.renderer();
        match mode {
            RenderMode::Html => renderer.render_html(text),
            RenderMode::Plain => renderer.render_plain(text),
        }
    }

    fn read_input(&self, mut stdin: impl Read) -> Result<String, CliError> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return Ok(std::fs::read_to_string(path)?);
        }
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        Ok(buf)
    }
}
