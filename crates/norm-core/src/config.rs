//! Configuration structures for the normalizer.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NormError, NormResult};

/// Cleaner configuration.
///
/// Loaded once at startup; the cleaner built from it is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Cleaner pipeline names, applied in order.
    #[serde(default = "default_cleaners")]
    pub cleaners: Vec<String>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_cleaners() -> Vec<String> {
    vec!["english_cleaners".to_string()]
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            cleaners: default_cleaners(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CleanerConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> NormResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> NormResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check that the configuration names at least one cleaner.
    pub fn validate(&self) -> NormResult<()> {
        if self.cleaners.iter().all(|name| name.trim().is_empty()) {
            return Err(NormError::config("empty cleaner list"));
        }
        Ok(())
    }

    /// Cleaner names joined into the comma-delimited list form.
    pub fn cleaner_list(&self) -> String {
        self.cleaners.join(",")
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json or text).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleaner_config_default() {
        let config = CleanerConfig::default();
        assert_eq!(config.cleaners, vec!["english_cleaners"]);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_cleaner_config_from_json_defaults() {
        let config = CleanerConfig::from_json_str("{}").unwrap();
        assert_eq!(config.cleaner_list(), "english_cleaners");
    }

    #[test]
    fn test_cleaner_config_from_json() {
        let config = CleanerConfig::from_json_str(
            r#"{"cleaners": ["turkish_cleaners", "basic"], "logging": {"level": "debug"}}"#,
        )
        .unwrap();
        assert_eq!(config.cleaner_list(), "turkish_cleaners,basic");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_cleaner_config_rejects_empty_list() {
        let result = CleanerConfig::from_json_str(r#"{"cleaners": []}"#);
        assert!(matches!(result, Err(NormError::Config(_))));
    }

    #[test]
    fn test_cleaner_config_bad_json() {
        let result = CleanerConfig::from_json_str(r#"{"cleaners": "#);
        assert!(matches!(result, Err(NormError::Serialization(_))));
    }

    #[test]
    fn test_cleaner_config_missing_file() {
        let result = CleanerConfig::from_json_file("/nonexistent/cleaners.json");
        assert!(matches!(result, Err(NormError::Io(_))));
    }
}
