//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what is loaded here.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// How a quote is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Machine-readable quote document.
    #[default]
    Json,
    /// Order summary as the buyer would read it.
    Text,
}

/// checkout-cli configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog TOML file
    pub catalog_path: PathBuf,

    /// Default log filter when RUST_LOG is unset
    pub log_level: String,

    /// Pretty-print JSON output
    pub pretty_json: bool,

    /// Quote output format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            catalog_path: PathBuf::from("./catalog.toml"),
            log_level: "info".to_string(),
            pretty_json: true,
            output: OutputFormat::Json,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, test map).
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let config = CliConfig {
            catalog_path: lookup("CHECKOUT_CATALOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),

            log_level: lookup("CHECKOUT_LOG_LEVEL").unwrap_or(defaults.log_level),

            pretty_json: match lookup("CHECKOUT_PRETTY_JSON") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("CHECKOUT_PRETTY_JSON".to_string()))?,
                None => defaults.pretty_json,
            },

            output: match lookup("CHECKOUT_OUTPUT") {
                Some(value) => OutputFormat::from_str(value.trim(), true)
                    .map_err(|_| ConfigError::InvalidValue("CHECKOUT_OUTPUT".to_string()))?,
                None => defaults.output,
            },
        };

        if config.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue("CHECKOUT_LOG_LEVEL".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::load_from(lookup(&[])).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("./catalog.toml"));
        assert_eq!(config.log_level, "info");
        assert!(config.pretty_json);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::load_from(lookup(&[
            ("CHECKOUT_CATALOG", "/etc/checkout/catalog.toml"),
            ("CHECKOUT_LOG_LEVEL", "debug"),
            ("CHECKOUT_PRETTY_JSON", "false"),
            ("CHECKOUT_OUTPUT", "TEXT"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/etc/checkout/catalog.toml"));
        assert_eq!(config.log_level, "debug");
        assert!(!config.pretty_json);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_values() {
        let err = CliConfig::load_from(lookup(&[("CHECKOUT_PRETTY_JSON", "maybe")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CHECKOUT_PRETTY_JSON");

        let err = CliConfig::load_from(lookup(&[("CHECKOUT_OUTPUT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CHECKOUT_OUTPUT");

        assert!(CliConfig::load_from(lookup(&[("CHECKOUT_LOG_LEVEL", " ")])).is_err());
    }
}
