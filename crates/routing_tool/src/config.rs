//! Configuration management for the routing tool.
//!
//! This module handles loading and validation of the hardware parameters
//! and logging settings from TOML files.

use crate::error::ToolError;
use routing_defs::{HwConfig, RoutingContext};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Application configuration loaded from TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hardware parameters of the routing fabric
    #[serde(default)]
    pub hardware: HwConfig,
    /// Logging configuration settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Logging system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Whether to output logs in JSON format
    #[serde(default)]
    pub json_format: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// If the file doesn't exist, a default configuration file is written at
    /// `path` and the defaults are returned.
    pub fn load_from_file(path: &Path) -> Result<Self, ToolError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: AppConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            let default_config = AppConfig::default();
            let toml_content = toml::to_string_pretty(&default_config)?;
            std::fs::write(path, toml_content)?;
            info!("Created default configuration file: {}", path.display());
            Ok(default_config)
        }
    }

    /// Builds the routing context for the configured hardware.
    pub fn to_routing_context(&self) -> Result<RoutingContext, ToolError> {
        Ok(RoutingContext::new(self.hardware)?)
    }

    /// Validates the configuration for consistency and correctness.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, or an error string describing the issue.
    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(format!(
                "Invalid log level: {}. Must be one of: {valid_levels:?}",
                &self.logging.level
            ));
        }

        self.hardware.validate().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert!(config.hardware.coord_y_priority);
        assert_eq!(config.hardware.n_sub_routing_node, 4);
        assert_eq!(config.hardware.coord_addr_nbit, 5);

        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json_format);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_nonexistent_file_creates_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("routing.toml");

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.hardware, HwConfig::default());
        assert!(path.exists());

        // The written file loads back to the same configuration
        let reloaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(reloaded.hardware, config.hardware);
        assert_eq!(reloaded.logging.level, config.logging.level);
    }

    #[test]
    fn test_load_from_existing_file() {
        let toml_content = r#"
[hardware]
coord_y_priority = false
n_sub_routing_node = 2
coord_addr_nbit = 6

[logging]
level = "debug"
json_format = true
"#;

        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), toml_content).unwrap();

        let config = AppConfig::load_from_file(temp_file.path()).unwrap();

        assert!(!config.hardware.coord_y_priority);
        assert_eq!(config.hardware.n_sub_routing_node, 2);
        assert_eq!(config.hardware.coord_addr_nbit, 6);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
    }

    #[test]
    fn test_serde_deserialization_with_defaults() {
        let toml_content = r#"
[hardware]
coord_y_priority = false
"#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();

        assert!(!config.hardware.coord_y_priority);
        assert_eq!(config.hardware.n_sub_routing_node, 4);
        assert_eq!(config.hardware.coord_addr_nbit, 5);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "[hardware\nn_sub_routing_node = ").unwrap();

        let result = AppConfig::load_from_file(temp_file.path());
        assert!(matches!(result, Err(ToolError::ConfigParse(_))));
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "invalid_level".to_string();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid log level"));
    }

    #[test]
    fn test_validation_invalid_hardware() {
        let mut config = AppConfig::default();
        config.hardware.n_sub_routing_node = 0;

        let result = config.validate();
        assert!(result.unwrap_err().contains("n_sub_routing_node"));
        assert!(config.to_routing_context().is_err());
    }

    #[test]
    fn test_validation_valid_log_levels() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let mut config = AppConfig::default();
            config.logging.level = level.to_string();
            assert!(config.validate().is_ok(), "Level '{}' should be valid", level);
        }
    }
}
