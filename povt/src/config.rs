//! Configuration module for the povt CLI.
//!
//! This module handles locating and loading `povt.toml`.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PovtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "povt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Defaults for the tokens command.
    #[serde(default)]
    pub tokens: TokensConfig,
}

/// Tokens-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Output format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Leave whitespace tokens out of the listing.
    #[serde(default)]
    pub skip_whitespace: bool,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            skip_whitespace: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/povt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PovtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| PovtError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("povt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("povt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.tokens.format, "text");
        assert!(!config.tokens.skip_whitespace);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[tokens]\nskip_whitespace = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.tokens.format, "text");
        assert!(config.tokens.skip_whitespace);
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        let original = Config {
            verbose: true,
            tokens: TokensConfig {
                format: "json".to_string(),
                skip_whitespace: true,
            },
        };
        std::fs::write(&config_path, toml::to_string_pretty(&original).unwrap()).unwrap();

        assert_eq!(Config::load_from_path(&config_path).unwrap(), original);
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = \"maybe\"").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, PovtError::Config(_)));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/povt.toml"));
        assert!(matches!(result, Err(PovtError::Config(_))));
    }
}
