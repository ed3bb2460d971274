//! User settings for the dashboard
//!
//! Read from `~/.config/tickerboard/settings.json`; any missing field takes
//! its default, and a missing or unreadable file yields the defaults outright.
//! `TICKERBOARD_API_URL` overrides the configured base URL.

use crate::api::DEFAULT_BASE_URL;
use crate::models::VolatilityUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_URL_ENV: &str = "TICKERBOARD_API_URL";

/// API connection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// No timeout unless one is configured.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// How values are shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_days")]
    pub default_days: u32,
    #[serde(default)]
    pub comparison_volatility_unit: VolatilityUnit,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_days() -> u32 {
    30
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            default_days: default_days(),
            comparison_volatility_unit: VolatilityUnit::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from the config file and apply environment overrides
    pub fn load() -> Self {
        let mut settings = Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                settings.api.base_url = url.trim().to_string();
            }
        }

        settings
    }

    /// Config file path (~/.config/tickerboard/settings.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tickerboard").join("settings.json"))
    }

    /// Read settings from `path`, returning defaults if the file doesn't exist or is invalid
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:8000/api");
        assert_eq!(settings.api.timeout_secs, None);
        assert_eq!(settings.display.currency_symbol, "₹");
        assert_eq!(settings.display.default_days, 30);
        assert_eq!(settings.display.comparison_volatility_unit, VolatilityUnit::Fraction);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{"display": {"currency_symbol": "$", "comparison_volatility_unit": "percent"}}"#,
        )
        .unwrap();
        assert_eq!(settings.display.currency_symbol, "$");
        assert_eq!(settings.display.default_days, 30);
        assert_eq!(settings.display.comparison_volatility_unit, VolatilityUnit::Percent);
        assert_eq!(settings.api, ApiSettings::default());
    }

    #[test]
    fn test_load_from_missing_or_invalid_file() {
        let dir = std::env::temp_dir().join(format!("tickerboard-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert_eq!(Settings::load_from(&missing), Settings::default());

        let invalid = dir.join("invalid.json");
        std::fs::write(&invalid, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&invalid), Settings::default());

        let valid = dir.join("valid.json");
        std::fs::write(&valid, r#"{"api": {"base_url": "http://10.0.0.5:8000/api", "timeout_secs": 5}}"#).unwrap();
        let loaded = Settings::load_from(&valid);
        assert_eq!(loaded.api.base_url, "http://10.0.0.5:8000/api");
        assert_eq!(loaded.api.timeout_secs, Some(5));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
