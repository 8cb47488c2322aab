//! Configuration file parsing.
//!
//! Parses individual `.phrasal.toml` files into intermediate `RawConfig`
//! structures that keep every field optional until files are merged.

use std::{fs, path::Path};

use phrasal_query::Dialect;
use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, OutputFormat};

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Output settings section.
    pub output: Option<RawOutputSettings>,
    /// Backend settings section.
    pub backend: Option<RawBackendSettings>,
}

/// Raw output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOutputSettings {
    /// How parsed queries are printed.
    pub format: Option<OutputFormat>,
    /// Backend dialect for JSON output.
    pub dialect: Option<Dialect>,
    /// Whether JSON output is pretty-printed.
    pub pretty: Option<bool>,
}

/// Raw backend settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBackendSettings {
    /// Document field that Elasticsearch leaves match against.
    pub field: Option<String>,
}

/// Reads and parses a configuration file.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration text, attributing errors to `path`.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    let config: RawConfig = toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(field) = config.backend.as_ref().and_then(|b| b.field.as_deref())
        && field.trim().is_empty()
    {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: "backend.field",
            message: "field name must not be empty".to_string(),
        });
    }

    Ok(config)
}

/// Parses configuration text without a source path.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Returns true if the file at `path` parses and sets `root = true`.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.output.is_none());
        assert!(config.backend.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
root = true

[output]
format = "json"
dialect = "elasticsearch"
pretty = false

[backend]
field = "body"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        let output = config.output.unwrap();
        assert_eq!(output.format, Some(OutputFormat::Json));
        assert_eq!(output.dialect, Some(Dialect::Elasticsearch));
        assert_eq!(output.pretty, Some(false));
        assert_eq!(config.backend.unwrap().field.as_deref(), Some("body"));
    }

    #[test]
    fn test_parse_partial_output() {
        let config = parse_config_str("[output]\nformat = \"tree\"\n", Path::new("t.toml")).unwrap();
        let output = config.output.unwrap();
        assert_eq!(output.format, Some(OutputFormat::Tree));
        assert!(output.dialect.is_none());
        assert!(output.pretty.is_none());
    }

    #[test]
    fn test_parse_unknown_dialect() {
        let result = parse_config_str("[output]\ndialect = \"solr\"\n", Path::new("t.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config_str("[output\n", Path::new("t.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_wrong_type_error() {
        let result = parse_config("[output]\npretty = \"yes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_fields_ignored() {
        let config = parse_config("[output]\ncolor = true\n[other]\nx = 1\n").unwrap();
        assert!(config.output.is_some());
    }

    #[test]
    fn test_parse_empty_field_rejected() {
        let result = parse_config_str("[backend]\nfield = \"  \"\n", Path::new("t.toml"));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "backend.field",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_config_file_not_found() {
        let result = parse_config_file(Path::new("/nonexistent/.phrasal.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn test_is_root_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("root.toml");
        fs::write(&path, "root = true\n").unwrap();
        assert!(is_root_config(&path));

        fs::write(&path, "root = false\n").unwrap();
        assert!(!is_root_config(&path));

        fs::write(&path, "[output]\n").unwrap();
        assert!(!is_root_config(&path));

        assert!(!is_root_config(&dir.path().join("missing.toml")));
    }
}
