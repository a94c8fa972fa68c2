//! Configuration management for feedback insights

use crate::error::{FeedbackError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Name of the designated text column every normalized table exposes.
    pub text_column: String,
    /// Whether the export carries the numeric polarity column next to the label.
    pub include_polarity: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_filename: String,
    pub preview_rows: usize,
    pub color_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig::default(),
            output: OutputConfig {
                default_filename: crate::output::exporter::DEFAULT_EXPORT_NAME.to_string(),
                preview_rows: 20,
                color_output: true,
            },
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            text_column: crate::processing::table::TEXT_COLUMN.to_string(),
            include_polarity: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                FeedbackError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            FeedbackError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("feedback-insights")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.processing.text_column, "Feedback");
        assert!(config.processing.include_polarity);
        assert_eq!(config.output.default_filename, "structured_feedback.csv");
    }

    #[test]
    fn test_roundtrips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.processing.text_column, config.processing.text_column);
        assert_eq!(parsed.output.preview_rows, config.output.preview_rows);
    }
}
