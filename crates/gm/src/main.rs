//! gridmark CLI.
//!
//! Provides commands for:
//! - `render`: Render item markup to an HTML fragment
//! - `plain`: Render item markup to plain text
//! - `layout show|add|reset`: Inspect and edit the persisted layout

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LayoutCommand, RenderArgs, RenderMode};
use output::Output;

/// gridmark - markup and layout tooling for grid documents.
#[derive(Parser)]
#[command(name = "gm", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render item markup to an HTML fragment.
    Render(RenderArgs),
    /// Render item markup to plain text.
    Plain(RenderArgs),
    /// Persisted layout commands.
    #[command(subcommand)]
    Layout(LayoutCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(RenderMode::Html),
        Commands::Plain(args) => args.execute(RenderMode::Plain),
        Commands::Layout(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
