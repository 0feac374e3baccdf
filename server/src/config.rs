//! Configuration management

use serde::{Deserialize, Serialize};
use statcard_core::{DisplayValue, Error, Result};
use statcard_ui::ThemeMode;

const DEFAULT_TITLE: &str = "Stat Cards";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Page heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Color theme applied to the page
    #[serde(default)]
    pub theme: ThemeMode,

    /// Cards shown on the showcase page
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

/// One stat card on the showcase page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardConfig {
    pub value: DisplayValue,
    pub label: String,
    /// Text glyph (emoji or icon font ligature) shown above the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Extra classes for the card container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            Self::load_from_file(p)
        } else {
            Self::load_from_env()
        }
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config {}: {}", path, e)))?;

        Self::parse(&content)
    }

    /// Parse TOML configuration
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    fn load_from_env() -> Result<Self> {
        let title = std::env::var("STATCARD_TITLE").unwrap_or_else(|_| default_title());

        let theme = match std::env::var("STATCARD_THEME") {
            Ok(value) => value
                .parse()
                .map_err(|e| Error::ConfigError(format!("Invalid STATCARD_THEME: {}", e)))?,
            Err(_) => ThemeMode::default(),
        };

        Ok(Config {
            title,
            theme,
            cards: sample_cards(),
        })
    }
}

/// Cards shown when no configuration file is given
pub fn sample_cards() -> Vec<CardConfig> {
    vec![
        CardConfig {
            value: DisplayValue::from(42),
            label: "Wins".to_string(),
            icon: None,
            class: None,
        },
        CardConfig {
            value: DisplayValue::from("1,204"),
            label: "Games Played".to_string(),
            icon: Some("🏆".to_string()),
            class: Some("border-gold".to_string()),
        },
    ]
}
