//! Catalog-backed localizer.
//!
//! Built-in catalogs cover `en` and `ru`. A YAML file mapping catalog names
//! (`button_ok`, `wrong_value_single`, ...) to strings can override any entry
//! or supply a locale that has no built-in catalog. Keys missing from the
//! selected catalog fall back to English.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::LocalizationConfig;
use crate::ports::{LangKey, Localizer};

static EN: Lazy<HashMap<LangKey, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (LangKey::WrongValueSingle, "Please choose one of the offered values."),
        (
            LangKey::WrongValueMultiple,
            "Please use the buttons to choose values.",
        ),
        (LangKey::NothingSelected, "Nothing selected. Choose at least one value."),
        (LangKey::SelectedValuePrefix, "✓"),
        (LangKey::OkButton, "OK"),
        (LangKey::BackButton, "Back"),
        (LangKey::ClearButton, "Clear"),
        (LangKey::AllButton, "All"),
    ])
});

static RU: Lazy<HashMap<LangKey, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (LangKey::WrongValueSingle, "Выберите одно из предложенных значений."),
        (LangKey::WrongValueMultiple, "Выбирайте значения кнопками."),
        (LangKey::NothingSelected, "Ничего не выбрано. Выберите хотя бы одно значение."),
        (LangKey::SelectedValuePrefix, "✓"),
        (LangKey::OkButton, "ОК"),
        (LangKey::BackButton, "Назад"),
        (LangKey::ClearButton, "Очистить"),
        (LangKey::AllButton, "Все"),
    ])
});

fn builtin(locale: &str) -> Option<&'static HashMap<LangKey, &'static str>> {
    match locale {
        "en" => Some(&*EN),
        "ru" => Some(&*RU),
        _ => None,
    }
}

/// Errors raised while building a localizer
#[derive(Debug, Error)]
pub enum LocalizerError {
    #[error("No catalog for locale '{0}'")]
    UnknownLocale(String),

    #[error("Failed to read catalog {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("Invalid catalog {path}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    #[error("Caption for {0:?} must not be empty")]
    EmptyCaption(LangKey),
}

/// Localizer over an in-memory catalog.
#[derive(Debug, Clone)]
pub struct CatalogLocalizer {
    locale: String,
    entries: HashMap<LangKey, String>,
}

impl CatalogLocalizer {
    /// Localizer for a built-in locale.
    pub fn builtin(locale: &str) -> Result<Self, LocalizerError> {
        let catalog =
            builtin(locale).ok_or_else(|| LocalizerError::UnknownLocale(locale.to_string()))?;
        Ok(Self {
            locale: locale.to_string(),
            entries: catalog
                .iter()
                .map(|(key, text)| (*key, text.to_string()))
                .collect(),
        })
    }

    /// English catalog.
    pub fn english() -> Self {
        Self {
            locale: "en".to_string(),
            entries: EN.iter().map(|(key, text)| (*key, text.to_string())).collect(),
        }
    }

    /// Localizer for `locale` seeded with `entries`; missing keys use English.
    pub fn with_entries(locale: impl Into<String>, entries: HashMap<LangKey, String>) -> Self {
        Self {
            locale: locale.into(),
            entries,
        }
    }

    /// Override entries from a YAML catalog file.
    pub fn with_overrides_from_yaml(mut self, path: &Path) -> Result<Self, LocalizerError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| LocalizerError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let overrides: HashMap<LangKey, String> =
            serde_yaml::from_str(&yaml).map_err(|e| LocalizerError::InvalidCatalog {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        self.entries.extend(overrides);
        Ok(self)
    }

    /// Build from configuration.
    pub fn from_config(config: &LocalizationConfig) -> Result<Self, LocalizerError> {
        let base = match builtin(&config.locale) {
            Some(_) => Self::builtin(&config.locale)?,
            None if config.catalog_path.is_some() => {
                Self::with_entries(config.locale.clone(), HashMap::new())
            }
            None => return Err(LocalizerError::UnknownLocale(config.locale.clone())),
        };

        let localizer = match &config.catalog_path {
            Some(path) => base.with_overrides_from_yaml(path)?,
            None => base,
        };
        localizer.ensure_captions()?;

        tracing::debug!(locale = %localizer.locale, "localizer ready");
        Ok(localizer)
    }

    /// Every button caption must be non-empty so commands stay distinguishable.
    fn ensure_captions(&self) -> Result<(), LocalizerError> {
        for key in [
            LangKey::OkButton,
            LangKey::BackButton,
            LangKey::ClearButton,
            LangKey::AllButton,
        ] {
            if self.text(key).is_empty() {
                return Err(LocalizerError::EmptyCaption(key));
            }
        }
        Ok(())
    }
}

impl Default for CatalogLocalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for CatalogLocalizer {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn text(&self, key: LangKey) -> String {
        match self.entries.get(&key) {
            Some(text) => text.clone(),
            None => EN.get(&key).map(|text| text.to_string()).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_catalogs_are_complete() {
        for locale in ["en", "ru"] {
            let catalog = builtin(locale).unwrap();
            for key in LangKey::ALL {
                assert!(catalog.contains_key(&key), "{locale} lacks {key:?}");
            }
        }
    }

    #[test]
    fn english_captions() {
        let localizer = CatalogLocalizer::english();
        assert_eq!(localizer.text(LangKey::OkButton), "OK");
        assert_eq!(localizer.text(LangKey::BackButton), "Back");
        assert_eq!(localizer.text(LangKey::ClearButton), "Clear");
        assert_eq!(localizer.text(LangKey::AllButton), "All");
        assert_eq!(localizer.text(LangKey::SelectedValuePrefix), "✓");
    }

    #[test]
    fn russian_catalog() {
        let localizer = CatalogLocalizer::builtin("ru").unwrap();
        assert_eq!(localizer.locale(), "ru");
        assert_eq!(localizer.text(LangKey::BackButton), "Назад");
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(matches!(
            CatalogLocalizer::builtin("de"),
            Err(LocalizerError::UnknownLocale(_))
        ));
    }

    #[test]
    fn missing_entries_fall_back_to_english() {
        let localizer = CatalogLocalizer::with_entries("de", HashMap::new());
        assert_eq!(localizer.text(LangKey::OkButton), "OK");
    }

    #[test]
    fn yaml_overrides_replace_entries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "button_ok: Done\nnothing_selected_error: Pick something").unwrap();

        let localizer = CatalogLocalizer::english()
            .with_overrides_from_yaml(file.path())
            .unwrap();

        assert_eq!(localizer.text(LangKey::OkButton), "Done");
        assert_eq!(localizer.text(LangKey::NothingSelected), "Pick something");
        assert_eq!(localizer.text(LangKey::ClearButton), "Clear");
    }

    #[test]
    fn from_config_with_custom_locale_needs_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "button_ok: Fertig\nbutton_back: Zurück").unwrap();

        let config = LocalizationConfig {
            locale: "de".to_string(),
            catalog_path: Some(file.path().to_path_buf()),
        };
        let localizer = CatalogLocalizer::from_config(&config).unwrap();
        assert_eq!(localizer.locale(), "de");
        assert_eq!(localizer.text(LangKey::OkButton), "Fertig");
        assert_eq!(localizer.text(LangKey::AllButton), "All");

        let without_file = LocalizationConfig {
            locale: "de".to_string(),
            catalog_path: None,
        };
        assert!(CatalogLocalizer::from_config(&without_file).is_err());
    }

    #[test]
    fn empty_caption_override_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "button_all: \"\"").unwrap();

        let config = LocalizationConfig {
            locale: "en".to_string(),
            catalog_path: Some(file.path().to_path_buf()),
        };
        assert!(matches!(
            CatalogLocalizer::from_config(&config),
            Err(LocalizerError::EmptyCaption(LangKey::AllButton))
        ));
    }
}
