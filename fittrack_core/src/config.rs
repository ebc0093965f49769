//! Configuration file support for FitTrack.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fittrack/config.toml`.

use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How workouts are rendered in the shell
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// strftime pattern for workout dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,

    #[serde(default = "default_distance_unit")]
    pub distance_unit: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            weight_unit: default_weight_unit(),
            distance_unit: default_distance_unit(),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_date_format() -> String {
    "%Y-%m-%d".into()
}

fn default_weight_unit() -> String {
    "kg".into()
}

fn default_distance_unit() -> String {
    "km".into()
}

fn default_log_level() -> String {
    crate::logging::DEFAULT_LEVEL.into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::default_config_path())
    }

    /// Load configuration from `path`, falling back to defaults if it doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"));
        base.join("fittrack").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check values serde can't check on its own
    pub fn validate(&self) -> Result<()> {
        let display = &self.display;
        if display.date_format.is_empty()
            || StrftimeItems::new(&display.date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(Error::Config(format!(
                "invalid date_format '{}'",
                display.date_format
            )));
        }
        if display.weight_unit.trim().is_empty() || display.distance_unit.trim().is_empty() {
            return Err(Error::Config("units must not be empty".into()));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging level must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.date_format, "%Y-%m-%d");
        assert_eq!(config.display.weight_unit, "kg");
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.display.weight_unit = "lb".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.display.weight_unit, "lb");
        assert_eq!(loaded.display.date_format, config.display.date_format);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[display]
distance_unit = "mi"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.distance_unit, "mi");
        assert_eq!(config.display.weight_unit, "kg"); // default
        assert_eq!(config.logging.level, "warn"); // default
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.display.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ndate_format = \"%Y-%\"\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
