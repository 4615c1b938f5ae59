//! Note storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use super::redis::RedisConfig;

/// Which note store backs the selections
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
    Redis,
}

/// Note storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Selected backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory of the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Redis backend settings
    #[serde(default)]
    pub redis: RedisConfig,
}

impl StorageConfig {
    /// Validate storage configuration for the selected backend
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.backend {
            StorageBackend::Memory => Ok(()),
            StorageBackend::File => {
                if self.data_dir.as_os_str().is_empty() {
                    return Err(ValidationError::MissingRequired("STORAGE__DATA_DIR"));
                }
                Ok(())
            }
            StorageBackend::Redis => self.redis.validate(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            redis: RedisConfig::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/selections")
}
