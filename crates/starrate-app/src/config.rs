//! Demo configuration.

use peniko::Color;
use serde::{Deserialize, Serialize};
use starrate_core::{RatingConfig, RatingError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid rating config: {0}")]
    Rating(#[from] RatingError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Window background as RGBA8
    pub background: [u8; 4],
    /// Widget the user rates with
    pub user: RatingConfig,
    /// Score shown by the display-only widget
    pub summary_rating: f64,
    /// Display-only widget
    pub summary: RatingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Star Rating".to_string(),
            width: 640,
            height: 420,
            background: [250, 250, 250, 255],
            user: RatingConfig::new().with_interactive(true).with_icon_size(24.0),
            summary_rating: 1.5,
            summary: RatingConfig::new()
                .with_icon_size(30.0)
                .with_annotation(1234u64),
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.user.validate()?;
        config.summary.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Window background color.
    pub fn background_color(&self) -> Color {
        let [r, g, b, a] = self.background;
        Color::from_rgba8(r, g, b, a)
    }
}
