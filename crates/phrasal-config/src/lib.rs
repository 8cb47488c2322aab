//! Configuration system for phrasal.
//!
//! phrasal uses TOML configuration files named `.phrasal.toml`. Configuration
//! is resolved by walking up the directory tree from the current working
//! directory, collecting any `.phrasal.toml` files found, then loading
//! `~/.phrasal.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
use log::debug;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawBackendSettings, RawConfig, RawOutputSettings, parse_config_file, parse_config_str,
};
use phrasal_query::Dialect;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};

/// Top-level merged configuration for phrasal.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output settings.
    pub output: OutputSettings,
    /// Backend query settings.
    pub backend: BackendSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Config files that contributed, highest precedence first.
    pub files: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.phrasal.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                debug!("loading config {}", path.display());
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.phrasal.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            output: &self.output,
            backend: &self.backend,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// How parsed queries are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented clause tree grouped by role.
    #[default]
    Tree,
    /// Backend query as JSON.
    Json,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// How parsed queries are printed.
    pub format: OutputFormat,
    /// Role names and leaf layout for JSON output.
    pub dialect: Dialect,
    /// Whether JSON output is pretty-printed.
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tree,
            dialect: Dialect::Neutral,
            pretty: true,
        }
    }
}

/// Backend query settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Document field that Elasticsearch match leaves search.
    pub field: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            field: "content".to_string(),
        }
    }
}

/// Borrowed view of the settings sections, for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Output settings.
    output: &'a OutputSettings,
    /// Backend settings.
    backend: &'a BackendSettings,
}
