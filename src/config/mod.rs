//! Configuration management module
//!
//! Handles CLI argument sanitization and loading, saving, and validation
//! of the engine configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{CmrbError, Result, APP_NAME, CONFIG_FILE};

/// Engine configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of worker threads spawned per benchmark
    pub thread_count: usize,
    /// Renderer used for benchmark output
    pub output: OutputFormat,
}

/// Output renderer variants selectable via config file or CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full-screen terminal dashboard
    Tui,
    /// Plain line-oriented console output
    Plain,
    /// Line-delimited JSON events on stdout
    Json,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thread_count: 1,
            output: OutputFormat::Tui,
        }
    }
}

impl EngineConfig {
    /// Create a new engine configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker thread count
    pub fn with_thread_count(mut self, count: usize) -> Self {
        self.thread_count = count;
        self
    }

    /// Set the output renderer
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.thread_count == 0 {
            return Err(CmrbError::ConfigError(
                "Thread count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from the standard config file location.
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            CmrbError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            CmrbError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CmrbError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CmrbError::ConfigError(format!("Failed to serialize configuration: {}", e)))?;

        fs::write(config_path, content).map_err(|e| {
            CmrbError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/cmrb/cmrb.toml or the platform equivalent
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CmrbError::ConfigError("Unable to determine config directory".to_string()))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// Sanitize a positional thread-count argument.
///
/// Non-numeric or non-positive input falls back to 1 with a warning on the
/// error stream; an absent argument silently defaults to 1.
pub fn parse_thread_count(arg: Option<&str>) -> usize {
    match arg {
        None => 1,
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) if value >= 1 => value as usize,
            _ => {
                eprintln!("Invalid thread count '{}', falling back to 1 thread.", raw);
                1
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.thread_count, 1);
        assert_eq!(config.output, OutputFormat::Tui);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_threads() {
        let config = EngineConfig::default().with_thread_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new()
            .with_thread_count(8)
            .with_output(OutputFormat::Json);
        assert_eq!(config.thread_count, 8);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_parse_thread_count() {
        assert_eq!(parse_thread_count(None), 1);
        assert_eq!(parse_thread_count(Some("4")), 4);
        assert_eq!(parse_thread_count(Some(" 16 ")), 16);
        assert_eq!(parse_thread_count(Some("abc")), 1);
        assert_eq!(parse_thread_count(Some("0")), 1);
        assert_eq!(parse_thread_count(Some("-3")), 1);
        assert_eq!(parse_thread_count(Some("2.5")), 1);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::new()
            .with_thread_count(4)
            .with_output(OutputFormat::Plain);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: EngineConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = EngineConfig::new()
            .with_thread_count(2)
            .with_output(OutputFormat::Json);
        config.save_to(&path).unwrap();

        let loaded = EngineConfig::load_from(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let loaded = EngineConfig::load_from(&path).unwrap();
        assert_eq!(loaded, EngineConfig::default());
    }

    #[test]
    fn test_config_file_path() {
        let path = EngineConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("cmrb"));
        assert!(path.to_string_lossy().contains("cmrb.toml"));
    }
}
