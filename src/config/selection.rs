//! Selection defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::SelectionKey;

/// Defaults applied when callers do not override them per selection
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionDefaults {
    /// Selection key used when the caller does not supply a token
    #[serde(default = "default_key")]
    pub default_key: String,

    /// Delete the prompt when a multi-value selection ends
    #[serde(default = "default_true")]
    pub delete_prompt_on_success: bool,

    /// Delete the prompt when a single value is chosen
    #[serde(default)]
    pub delete_prompt_on_choice: bool,

    /// Also store the chosen single value in the `<key>_result` note
    #[serde(default)]
    pub persist_single_result: bool,
}

impl SelectionDefaults {
    /// The default selection key as a domain value
    pub fn default_selection_key(&self) -> Result<SelectionKey, ValidationError> {
        SelectionKey::new(self.default_key.clone())
            .map_err(|e| ValidationError::InvalidSelectionKey(e.to_string()))
    }

    /// Validate selection defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.default_selection_key().map(|_| ())
    }
}

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            default_key: default_key(),
            delete_prompt_on_success: true,
            delete_prompt_on_choice: false,
            persist_single_result: false,
        }
    }
}

fn default_key() -> String {
    "selection".to_string()
}

fn default_true() -> bool {
    true
}
