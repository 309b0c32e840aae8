// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::TOML_EXTENSION;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main configuration structure for an interceptor chain.
///
/// It is typically loaded from a YAML (or TOML) configuration file. The order
/// of `interceptors` is the order they run in.
///
/// # Fields
/// * `name` - Optional human-readable name for the chain
/// * `interceptors` - Ordered interceptor definitions
///
/// # Example
/// ```yaml
/// name: guarded
/// interceptors:
///   - id: audit
///     type: log
///   - id: guard
///     type: guard
///     options:
///       blocked: ["drop table"]
///   - id: action
///     type: action
/// ```
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub name: Option<String>,
    pub interceptors: Vec<InterceptorConfig>,
}

/// Configuration for a single interceptor in the chain.
///
/// # Fields
/// * `id` - Unique identifier; also the interceptor's name in logs
/// * `kind` - Local implementation to build (`type` in the file)
/// * `options` - Implementation-specific options
///
/// # Example
/// ```yaml
/// id: shout
/// type: change_text_case
/// options:
///   case: upper
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InterceptorConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>, // interceptor-specific options
}

/// On-disk configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML; everything else is treated as YAML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(TOML_EXTENSION) => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse a config from a string in the given format
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_config(&content, ConfigFormat::from_path(path))
}

/// Load and validate a config from a YAML or TOML file
///
/// Validation errors are collected and returned together; warnings are
/// logged and do not fail the load.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    crate::config::validate_interceptor_chain(&cfg).map_err(ConfigError::Validation)?;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
name: basic
interceptors:
  - id: logger
    type: log
  - id: action
    type: action
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.name.as_deref(), Some("basic"));
        assert_eq!(cfg.interceptors.len(), 2);
        assert_eq!(cfg.interceptors[0].id, "logger");
        assert_eq!(cfg.interceptors[1].kind, "action");
        assert!(cfg.interceptors[1].options.is_empty());
    }

    #[test]
    fn test_parse_interceptor_with_options() {
        let yaml = r#"
interceptors:
  - id: guard
    type: guard
    options:
      blocked: ["a", "b"]
      response: nope
      enabled: true
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        let interceptor = &cfg.interceptors[0];

        assert_eq!(interceptor.options.len(), 3);
        assert!(interceptor.options.contains_key("blocked"));
        assert_eq!(interceptor.options["response"].as_str(), Some("nope"));
        assert_eq!(interceptor.options["enabled"].as_bool(), Some(true));
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
name = "from-toml"

[[interceptors]]
id = "shout"
type = "change_text_case"
options = { case = "upper" }

[[interceptors]]
id = "action"
type = "action"
"#;

        let cfg = parse_config(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.name.as_deref(), Some("from-toml"));
        assert_eq!(cfg.interceptors.len(), 2);
        assert_eq!(cfg.interceptors[0].options["case"].as_str(), Some("upper"));
    }

    #[test]
    fn test_missing_interceptors_is_an_error() {
        let result = parse_config("name: nothing\n", ConfigFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path("chain.toml"), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path("chain.TOML"), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path("chain.yaml"), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("chain"), ConfigFormat::Yaml);
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_temp(
            ".yaml",
            r#"
interceptors:
  - id: logger
    type: log
  - id: action
    type: action
"#,
        );

        let result = load_and_validate_config(file.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_and_validate_duplicate_ids() {
        let file = write_temp(
            ".yaml",
            r#"
interceptors:
  - id: same
    type: log
  - id: same
    type: action
"#,
        );

        let error_msg = load_and_validate_config(file.path()).unwrap_err().to_string();
        assert!(error_msg.contains("Configuration validation failed"));
        assert!(error_msg.contains("Duplicate interceptor ID: 'same'"));
    }

    #[test]
    fn test_load_and_validate_warnings_do_not_fail() {
        let file = write_temp(
            ".toml",
            r#"
[[interceptors]]
id = "logger"
type = "log"
"#,
        );

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.interceptors.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
