//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`.

use std::path::PathBuf;

use crate::{
    BackendSettings, Config, OutputSettings,
    parse::{RawBackendSettings, RawConfig, RawOutputSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first
/// (closest to CWD), lowest precedence last (global config). For every scalar
/// setting the first file that defines it wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut output = OutputSettings::default();
    let mut backend = BackendSettings::default();

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.output {
            apply_raw_output(&mut output, raw);
        }
        if let Some(ref raw) = parsed.config.backend {
            apply_raw_backend(&mut backend, raw);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());

    Config {
        output,
        backend,
        config_root,
        files: configs.iter().map(|c| c.path.clone()).collect(),
    }
}

/// Applies raw output settings to result, overwriting any present values.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(v) = raw.format {
        result.format = v;
    }
    if let Some(v) = raw.dialect {
        result.dialect = v;
    }
    if let Some(v) = raw.pretty {
        result.pretty = v;
    }
}

/// Applies raw backend settings to result, overwriting any present values.
fn apply_raw_backend(result: &mut BackendSettings, raw: &RawBackendSettings) {
    if let Some(ref v) = raw.field {
        result.field.clone_from(v);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use phrasal_query::Dialect;

    use super::*;
    use crate::{OutputFormat, parse::parse_config_str};

    fn parsed(path: &str, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            config: parse_config_str(toml, Path::new(path)).unwrap(),
        }
    }

    #[test]
    fn empty_merge_is_default() {
        let config = merge_configs(&[]);
        assert_eq!(config.output, OutputSettings::default());
        assert_eq!(config.backend, BackendSettings::default());
        assert!(config.config_root.is_none());
        assert!(config.files.is_empty());
    }

    #[test]
    fn closest_value_wins() {
        let configs = [
            parsed("/p/a/.phrasal.toml", "[output]\ndialect = \"elasticsearch\"\n"),
            parsed(
                "/p/.phrasal.toml",
                "[output]\ndialect = \"neutral\"\nformat = \"json\"\n",
            ),
        ];
        let config = merge_configs(&configs);
        assert_eq!(config.output.dialect, Dialect::Elasticsearch);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn unset_values_fall_through() {
        let configs = [
            parsed("/p/a/.phrasal.toml", "[backend]\n"),
            parsed("/home/.phrasal.toml", "[backend]\nfield = \"title\"\n"),
        ];
        let config = merge_configs(&configs);
        assert_eq!(config.backend.field, "title");
        assert!(config.output.pretty);
    }

    #[test]
    fn config_root_is_closest_directory() {
        let configs = [
            parsed("/p/a/.phrasal.toml", ""),
            parsed("/p/.phrasal.toml", ""),
        ];
        let config = merge_configs(&configs);
        assert_eq!(config.config_root, Some(PathBuf::from("/p/a")));
        assert_eq!(config.files.len(), 2);
    }
}
