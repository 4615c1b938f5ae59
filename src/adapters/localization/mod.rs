//! Localization Adapters
//!
//! - **CatalogLocalizer** - Built-in `en`/`ru` catalogs with YAML overrides

mod catalog_localizer;

pub use catalog_localizer::{CatalogLocalizer, LocalizerError};
