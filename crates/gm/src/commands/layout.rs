//! Layout commands.
//!
//! Operate on the layout persisted in the configured store directory.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use gm_config::{CliSettings, Config, LayoutConfig};
use gm_layout::{
    LayoutItem, VerticalPosition, default_layout, load_layout, reset_layout, save_layout,
};
use gm_markup::render_plain;
use gm_store::{FileStore, LayoutStore};

use crate::error::CliError;
use crate::output::Output;

/// Layout subcommands.
#[derive(Subcommand)]
pub(crate) enum LayoutCommand {
    /// Print the persisted layout, or the default template when none is saved.
    Show(ShowArgs),
    /// Append a new item with the next free key.
    Add(AddArgs),
    /// Clear the persisted layout.
    Reset(StoreArgs),
}

/// Options locating the config file and store.
#[derive(Args)]
pub(crate) struct StoreArgs {
    /// Path to configuration file (default: auto-discover gridmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Store directory override.
    #[arg(long, env = "GRIDMARK_STORE_DIR")]
    store_dir: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Print items as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Markup content of the new item.
    #[arg(default_value = "")]
    value: String,
}

impl StoreArgs {
    fn open(&self) -> Result<(Config, FileStore), CliError> {
        let cli_settings = CliSettings {
            store_dir: self.store_dir.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let store = FileStore::new(config.store_resolved.dir.clone());
        tracing::info!(
            config = ?config.config_path,
            store = %store.root().display(),
            "opened layout store"
        );
        Ok((config, store))
    }
}

impl LayoutCommand {
    /// Execute the command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        match self {
            Self::Show(args) => {
                let (config, store) = args.store.open()?;
                if store.get(&config.layout.storage_key).is_none() {
                    output.warning("No saved layout, showing the default template");
                }
                let layout = load_layout(&store, default_layout(&config.layout), &config.layout);
                if args.json {
                    output.result(&serde_json::to_string_pretty(&layout.items)?);
                } else {
                    for item in &layout.items {
                        output.result(&format!(
                            "{}  {}",
                            output.highlight(&item.key),
                            describe(item)
                        ));
                    }
                }
            }
            Self::Add(args) => {
                let (config, store) = args.store.open()?;
                let key = add_item(&store, args.value, &config.layout)?;
                output.success(&format!("Added {}", output.highlight(&key)));
            }
            Self::Reset(args) => {
                let (config, store) = args.open()?;
                reset_layout(&store, &config.layout)?;
                output.success(&format!(
                    "Layout reset in {}",
                    store.root().display()
                ));
            }
        }
        Ok(())
    }
}

/// Load, append and save in one step. Returns the new item's key.
fn add_item<S>(store: &S, value: String, config: &LayoutConfig) -> Result<String, CliError>
where
    S: LayoutStore + ?Sized,
{
    let mut layout = load_layout(store, default_layout(config), config);
    let key = layout.add_item(value, config)?.key.clone();
    save_layout(store, &layout.items, config)?;
    Ok(key)
}

/// One-line summary of an item: position, size and the first line of its
/// plain-text content.
fn describe(item: &LayoutItem) -> String {
    let y = match item.y {
        VerticalPosition::At(y) => y.to_string(),
        VerticalPosition::AppendToEnd => "end".to_owned(),
    };
    let plain = render_plain(&item.value);
    let first_line = plain.content.lines().next().unwrap_or_default();
    format!(
        "({}, {}) {}x{}  {}",
        item.x, y, item.width, item.height, first_line
    )
}
