//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `KEYBOARD_SELECTION` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working
//! in-memory setup.
//!
//! # Example
//!
//! ```no_run
//! use keyboard_selection::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Locale: {}", config.localization.locale);
//! ```

mod error;
mod localization;
mod logging;
mod redis;
mod selection;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use localization::{LocalizationConfig, BUILTIN_LOCALES};
pub use logging::LoggingConfig;
pub use redis::RedisConfig;
pub use selection::SelectionDefaults;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Caption and error message catalog
    #[serde(default)]
    pub localization: LocalizationConfig,

    /// Conversation note store backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Per-selection defaults
    #[serde(default)]
    pub selection: SelectionDefaults,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `KEYBOARD_SELECTION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `KEYBOARD_SELECTION__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `KEYBOARD_SELECTION__LOCALIZATION__LOCALE=ru` -> `localization.locale = ru`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KEYBOARD_SELECTION")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.localization.validate()?;
        self.storage.validate()?;
        self.selection.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "KEYBOARD_SELECTION__STORAGE__BACKEND",
        "KEYBOARD_SELECTION__STORAGE__REDIS__URL",
        "KEYBOARD_SELECTION__STORAGE__REDIS__TTL_SECS",
        "KEYBOARD_SELECTION__LOCALIZATION__LOCALE",
        "KEYBOARD_SELECTION__SELECTION__DEFAULT_KEY",
        "KEYBOARD_SELECTION__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.localization.locale, "en");
        assert_eq!(config.selection.default_key, "selection");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_redis_backend() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("KEYBOARD_SELECTION__STORAGE__BACKEND", "redis");
        env::set_var("KEYBOARD_SELECTION__STORAGE__REDIS__URL", "redis://localhost:6379");
        env::set_var("KEYBOARD_SELECTION__STORAGE__REDIS__TTL_SECS", "600");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Redis);
        assert_eq!(config.storage.redis.url, "redis://localhost:6379");
        assert_eq!(config.storage.redis.ttl_secs, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_redis_backend_without_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("KEYBOARD_SELECTION__STORAGE__BACKEND", "redis");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_locale_and_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("KEYBOARD_SELECTION__LOCALIZATION__LOCALE", "ru");
        env::set_var("KEYBOARD_SELECTION__SELECTION__DEFAULT_KEY", "colours");
        env::set_var("KEYBOARD_SELECTION__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.localization.locale, "ru");
        assert_eq!(config.selection.default_key, "colours");
        assert!(config.logging.json);
    }
}
