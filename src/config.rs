//! UI Configuration
//!
//! Small JSON document kept in `localStorage`. Every field has a default,
//! so a missing key or a partial document still yields a usable config.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::router::ActiveView;

/// localStorage key holding the config JSON
pub const STORAGE_KEY: &str = "propmanager.config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("localStorage unavailable")]
    Storage,
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Show the administrator banner on the property view
    pub admin_mode: bool,
    /// View id shown on startup
    pub start_view: String,
    /// error | warn | info | debug | trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_mode: true,
            start_view: ActiveView::Properties.id().to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn start_view(&self) -> ActiveView {
        ActiveView::from_id(&self.start_view)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Read the config from localStorage; defaults when nothing is stored
pub fn load() -> Result<AppConfig, ConfigError> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ConfigError::Storage)?;
    match storage.get_item(STORAGE_KEY).ok().flatten() {
        Some(raw) => AppConfig::from_json(&raw),
        None => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.admin_mode);
        assert_eq!(config.start_view(), ActiveView::Properties);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_document() {
        let config = AppConfig::from_json(r#"{"admin_mode": false, "start_view": "dashboard"}"#).unwrap();
        assert!(!config.admin_mode);
        assert_eq!(config.start_view(), ActiveView::Dashboard);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_log_levels() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "WARN".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Warn);
        config.log_level = "chatty".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_unknown_start_view_falls_back() {
        let config = AppConfig::from_json(r#"{"start_view": "reports"}"#).unwrap();
        assert_eq!(config.start_view(), ActiveView::Properties);
    }

    #[test]
    fn test_malformed_document() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
