//! Input validation for selection turns.
//!
//! Two checks, both exact and side-effect free: membership of the incoming
//! text in the legal value list, and non-emptiness of the selection on
//! Confirm. Failures are [`TurnRejection`]s, which the handlers turn into
//! localized [`FieldErrors`] on the re-sent prompt.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CandidateModel, CommandCaptions, SelectedValues};
use crate::domain::foundation::ErrorCode;

/// Field name used for errors about the incoming text.
pub const TEXT_FIELD: &str = "text";

/// Field name used for errors about the selected values.
pub const VALUES_FIELD: &str = "values";

/// Why a turn was refused without ending the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRejection {
    /// The text is neither a candidate value nor an active command caption.
    InvalidInput,
    /// Confirm was pressed with nothing selected.
    EmptySelection,
}

impl TurnRejection {
    /// Field the rejection is reported under.
    pub fn field(&self) -> &'static str {
        match self {
            TurnRejection::InvalidInput => TEXT_FIELD,
            TurnRejection::EmptySelection => VALUES_FIELD,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TurnRejection::InvalidInput => ErrorCode::InvalidInput,
            TurnRejection::EmptySelection => ErrorCode::EmptySelection,
        }
    }
}

/// Structured error collection: field name to localized messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-message collection for a rejection.
    pub fn from_rejection(rejection: TurnRejection, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(rejection.field(), message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// All messages, ordered by field name.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }
}

/// Stateless validator for selection input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionValidator;

impl SelectionValidator {
    /// Legal inputs of a multi-value turn: candidate values followed by the
    /// active command captions.
    pub fn allowed_values(
        model: &CandidateModel,
        captions: &CommandCaptions,
        back_enabled: bool,
    ) -> Vec<String> {
        let mut allowed: Vec<String> = model.values().into_iter().map(str::to_string).collect();
        allowed.extend(
            captions
                .active_commands(back_enabled)
                .into_iter()
                .map(|command| captions.caption(command).to_string()),
        );
        allowed
    }

    /// Membership check: `text` must be exactly one of `allowed`.
    pub fn check_membership(text: &str, allowed: &[String]) -> Result<(), TurnRejection> {
        if allowed.iter().any(|value| value == text) {
            Ok(())
        } else {
            Err(TurnRejection::InvalidInput)
        }
    }

    /// Non-emptiness check on the current selection.
    pub fn check_not_empty(values: &SelectedValues) -> Result<(), TurnRejection> {
        if values.is_empty() {
            Err(TurnRejection::EmptySelection)
        } else {
            Ok(())
        }
    }
}
