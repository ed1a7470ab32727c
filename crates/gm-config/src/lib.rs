//! Configuration management for gridmark.
//!
//! Parses `gridmark.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [layout]
//! default_width = 6
//! default_height = 2
//! separator = "-"
//! key_prefix = "item"
//! storage_key = "layout"
//!
//! [store]
//! dir = ".gridmark"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "gridmark.toml";

/// Store directory used when the config does not name one.
const DEFAULT_STORE_DIR: &str = ".gridmark";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the store directory.
    pub store_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout constants.
    pub layout: LayoutConfig,
    /// Store configuration (paths are relative strings from TOML).
    store: StoreConfigRaw,

    /// Resolved store configuration (set after loading).
    #[serde(skip)]
    pub store_resolved: StoreConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Layout constants: item geometry and key format.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of a newly added item, in grid columns.
    pub default_width: u32,
    /// Height of a newly added item, in grid rows.
    pub default_height: u32,
    /// Token between key prefix and ordinal.
    pub separator: String,
    /// Prefix of generated item keys.
    pub key_prefix: String,
    /// Store key holding the persisted layout.
    pub storage_key: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_width: 6,
            default_height: 2,
            separator: "-".to_owned(),
            key_prefix: "item".to_owned(),
            storage_key: "layout".to_owned(),
        }
    }
}

impl LayoutConfig {
    /// Build the key for `ordinal`, e.g. `item-4`.
    #[must_use]
    pub fn key_for(&self, ordinal: u64) -> String {
        format!("{}{}{ordinal}", self.key_prefix, self.separator)
    }

    /// Validate that generated keys can be parsed back.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a size is zero, a string is empty,
    /// or the prefix contains the separator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_width == 0 {
            return Err(ConfigError::Validation(
                "layout.default_width must be greater than 0".to_owned(),
            ));
        }
        if self.default_height == 0 {
            return Err(ConfigError::Validation(
                "layout.default_height must be greater than 0".to_owned(),
            ));
        }
        require_non_empty(&self.separator, "layout.separator")?;
        require_non_empty(&self.key_prefix, "layout.key_prefix")?;
        require_non_empty(&self.storage_key, "layout.storage_key")?;
        if self.key_prefix.contains(self.separator.as_str()) {
            return Err(ConfigError::Validation(format!(
                "layout.key_prefix {:?} must not contain the separator {:?}",
                self.key_prefix, self.separator
            )));
        }
        if self.separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "layout.separator must not contain digits".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Raw store configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StoreConfigRaw {
    dir: Option<String>,
}

/// Resolved store configuration with absolute paths.
#[derive(Debug, Default)]
pub struct StoreConfig {
    /// Directory of the file-backed layout store.
    pub dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `gridmark.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::load_from(&cwd, config_path, cli_settings)
    }

    /// Same as [`Config::load`], discovering from `start` instead of the
    /// current directory.
    pub fn load_from(
        start: &Path,
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config(start) {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_base(start)
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(store_dir) = &settings.store_dir {
            self.store_resolved.dir.clone_from(store_dir);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            layout: LayoutConfig::default(),
            store: StoreConfigRaw::default(),
            store_resolved: StoreConfig {
                dir: base.join(DEFAULT_STORE_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()
    }

    /// Resolve relative paths against the config file directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let dir = self.store.dir.as_deref().unwrap_or(DEFAULT_STORE_DIR);
        self.store_resolved = StoreConfig {
            dir: config_dir.join(dir),
        };
    }
}
