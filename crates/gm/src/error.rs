//! CLI error types.

use gm_config::ConfigError;
use gm_layout::LayoutError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Layout(#[from] LayoutError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
