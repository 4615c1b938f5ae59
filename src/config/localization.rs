//! Localization configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Locales with a built-in catalog
pub const BUILTIN_LOCALES: [&str; 2] = ["en", "ru"];

/// Localization configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizationConfig {
    /// Locale code of the built-in catalog to start from
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Optional YAML file overriding catalog entries
    pub catalog_path: Option<PathBuf>,
}

impl LocalizationConfig {
    /// Check if the locale has a built-in catalog
    pub fn is_builtin_locale(&self) -> bool {
        BUILTIN_LOCALES.contains(&self.locale.as_str())
    }

    /// Validate localization configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.locale.is_empty() {
            return Err(ValidationError::MissingRequired("LOCALIZATION__LOCALE"));
        }
        if !self.is_builtin_locale() && self.catalog_path.is_none() {
            return Err(ValidationError::UnsupportedLocale(self.locale.clone()));
        }
        Ok(())
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            catalog_path: None,
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localization_defaults() {
        let config = LocalizationConfig::default();
        assert_eq!(config.locale, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_locale_needs_catalog() {
        let config = LocalizationConfig {
            locale: "de".to_string(),
            catalog_path: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedLocale(_))
        ));

        let config = LocalizationConfig {
            locale: "de".to_string(),
            catalog_path: Some(PathBuf::from("./lang/de.yaml")),
        };
        assert!(config.validate().is_ok());
    }
}
