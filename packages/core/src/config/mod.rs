//! Configuration module
//!
//! Schema, platform paths, a comment-tolerant loader, and validation
//! with actionable error messages.

pub mod paths;
mod schema;
mod validation;

pub use schema::Config;
pub use validation::{
    ValidationError, ValidationWarning, display_validation_error, display_validation_warning,
    validate_config,
};

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Errors from loading or saving the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config path (ensure HOME or XDG_CONFIG_HOME is set)")]
    NoConfigPath,

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(String),
}

/// Load the config file, or return defaults when it does not exist
///
/// A missing file is not an error; a malformed or unknown-field file is.
pub fn load_config_or_default() -> Result<Config, ConfigError> {
    let path = paths::get_config_path().ok_or(ConfigError::NoConfigPath)?;
    load_config_from(&path)
}

/// Save the config to the platform config path, creating parent dirs
pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    let path = paths::get_config_path().ok_or(ConfigError::NoConfigPath)?;
    save_config_to(&path, config)
}

pub(crate) fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&text)
}

pub(crate) fn save_config_to(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, json + "\n").map_err(|source| ConfigError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Parse config text, tolerating JSONC comments and trailing commas
fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let value = jsonc_parser::parse_to_serde_value(text, &Default::default())
        .map_err(|e| ConfigError::Parse(e.to_string()))?
        .ok_or_else(|| ConfigError::Parse("config file is empty".to_string()))?;

    serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            conda_env: "Test001".to_string(),
            pause_on_exit: false,
            ..Config::default()
        };
        save_config_to(&path, &config).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn parse_tolerates_comments() {
        let text = r#"{
            // conda environment hosting pixiv_auth.py
            "version": 1,
            "conda_env": "pixiv",
        }"#;
        let config = parse_config(text).unwrap();
        assert_eq!(config.conda_env, "pixiv");
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let text = r#"{"version": 1, "conda_environment": "pixiv"}"#;
        assert!(parse_config(text).is_err());
    }

    #[test]
    fn parse_rejects_empty_file() {
        assert!(parse_config("").is_err());
    }
}
