//! App Configuration
//!
//! Optional JSON overrides kept in local storage.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};

use crate::models::SpeechLang;
use crate::storage::KeyValueStore;

/// Storage key holding the config overrides
pub const CONFIG_KEY: &str = "wishlist.config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Speech language selected on startup
    pub default_language: SpeechLang,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_language: SpeechLang::EnUs,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read overrides from `store`; anything missing or malformed falls back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(CONFIG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::warn!("config unreadable, using defaults: {}", e);
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config malformed, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Console log level; None when logging is switched off
    pub fn console_level(&self) -> Option<Level> {
        self.level_filter().to_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_when_absent() {
        let config = AppConfig::load(&MemoryStore::new());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.console_level(), Some(Level::Info));
    }

    #[test]
    fn test_partial_override() {
        let store = MemoryStore::with_entry(CONFIG_KEY, r#"{"default_language":"it-IT","log_level":"debug"}"#);
        let config = AppConfig::load(&store);
        assert_eq!(config.default_language, SpeechLang::ItIt);
        assert_eq!(config.console_level(), Some(Level::Debug));
    }

    #[test]
    fn test_snapshot_key_is_not_configurable() {
        let store = MemoryStore::with_entry(CONFIG_KEY, r#"{"storage_key":"other","log_level":"warn"}"#);
        let config = AppConfig::load(&store);
        assert_eq!(config.console_level(), Some(Level::Warn));
        assert_eq!(config.default_language, SpeechLang::EnUs);
    }

    #[test]
    fn test_off_disables_console_logging() {
        let config = AppConfig {
            log_level: "off".to_string(),
            ..Default::default()
        };
        assert_eq!(config.console_level(), None);
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        let store = MemoryStore::with_entry(CONFIG_KEY, "{not json");
        assert_eq!(AppConfig::load(&store), AppConfig::default());
    }

    #[test]
    fn test_unknown_log_level_is_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
