//! # Configuration State
//!
//! Application configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`, `--storage-key`)
//! 2. Environment variables (`LODGE_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use serde::{Deserialize, Serialize};

use lodge_db::DEFAULT_BOOKINGS_KEY;

/// Environment variable naming the property shown in the banner.
pub const ENV_PROPERTY_NAME: &str = "LODGE_PROPERTY_NAME";

/// Environment variable naming the storage key for bookings.
pub const ENV_STORAGE_KEY: &str = "LODGE_STORAGE_KEY";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Property name (banner and confirmation)
    pub property_name: String,

    /// Key holding the booking array.
    /// Default: "bookings"
    pub storage_key: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            property_name: "Lodge".to_string(),
            storage_key: DEFAULT_BOOKINGS_KEY.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LODGE_PROPERTY_NAME`: Override property name
    /// - `LODGE_STORAGE_KEY`: Override storage key
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from any variable source. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(name) = lookup(ENV_PROPERTY_NAME).filter(|v| !v.trim().is_empty()) {
            config.property_name = name;
        }

        if let Some(key) = lookup(ENV_STORAGE_KEY).filter(|v| !v.trim().is_empty()) {
            config.storage_key = key;
        }

        config
    }

    /// Overrides the storage key (from `--storage-key`).
    pub fn with_storage_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key {
            self.storage_key = key;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.property_name, "Lodge");
        assert_eq!(config.storage_key, "bookings");
    }

    #[test]
    fn test_lookup_overrides() {
        let vars = HashMap::from([
            (ENV_PROPERTY_NAME, "Pine Cabin".to_string()),
            (ENV_STORAGE_KEY, "cabin-bookings".to_string()),
        ]);

        let config = ConfigState::from_lookup(|name| vars.get(name).cloned());

        assert_eq!(config.property_name, "Pine Cabin");
        assert_eq!(config.storage_key, "cabin-bookings");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = ConfigState::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_flag_beats_env() {
        let config = ConfigState::from_lookup(|name| {
            (name == ENV_STORAGE_KEY).then(|| "from-env".to_string())
        })
        .with_storage_key(Some("from-flag".to_string()));

        assert_eq!(config.storage_key, "from-flag");
        assert_eq!(ConfigState::default().with_storage_key(None).storage_key, "bookings");
    }
}
