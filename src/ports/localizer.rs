//! Localizer Port - Fixed captions and error messages.

use serde::{Deserialize, Serialize};

/// Keys of the fixed strings the selection machines display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LangKey {
    /// Error shown when a single-value answer is not a candidate.
    WrongValueSingle,
    /// Error shown when a multi-value input is not a candidate or command.
    WrongValueMultiple,
    /// Error shown on Confirm with nothing selected.
    #[serde(rename = "nothing_selected_error")]
    NothingSelected,
    /// Marker prefixed to the labels of selected candidates.
    SelectedValuePrefix,
    #[serde(rename = "button_ok")]
    OkButton,
    #[serde(rename = "button_back")]
    BackButton,
    #[serde(rename = "button_clear")]
    ClearButton,
    #[serde(rename = "button_all")]
    AllButton,
}

impl LangKey {
    pub const ALL: [LangKey; 8] = [
        LangKey::WrongValueSingle,
        LangKey::WrongValueMultiple,
        LangKey::NothingSelected,
        LangKey::SelectedValuePrefix,
        LangKey::OkButton,
        LangKey::BackButton,
        LangKey::ClearButton,
        LangKey::AllButton,
    ];
}

/// Port for localized string lookup.
///
/// Injected into the handlers; there is no process-wide locale.
pub trait Localizer: Send + Sync {
    /// Locale code this localizer serves (e.g. `en`).
    fn locale(&self) -> &str;

    /// Localized text for a key.
    fn text(&self, key: LangKey) -> String;
}
