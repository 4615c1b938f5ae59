//! Redis configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Redis configuration for the note store
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL
    #[serde(default)]
    pub url: String,

    /// Prefix of every note key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Lifetime of a note in seconds; abandoned selections expire after this
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RedisConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate Redis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__REDIS__URL"));
        }
        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err(ValidationError::InvalidRedisUrl);
        }
        if self.ttl_secs == 0 {
            return Err(ValidationError::InvalidNoteTtl);
        }
        Ok(())
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key_prefix: default_key_prefix(),
            ttl_secs: default_ttl(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_key_prefix() -> String {
    "selection".to_string()
}

fn default_ttl() -> u64 {
    86_400
}

fn default_timeout() -> u64 {
    5
}
