//! Types shared by the selection handlers.

use serde_json::Value;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SelectionKey};
use crate::domain::selection::{
    CandidateModelError, CommandCaptions, FieldErrors, SelectionRecord, TurnRejection,
};
use crate::ports::{LangKey, Localizer, MessengerError, NoteStoreError};

/// Failures that abort a turn.
///
/// Rejected input is not an error: it is reported through
/// [`SelectionOutcome::Pending`].
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Note store failure: {0}")]
    Storage(#[from] NoteStoreError),

    #[error("Messenger failure: {0}")]
    Messaging(#[from] MessengerError),

    #[error("Invalid candidates: {0}")]
    InvalidCandidates(#[from] CandidateModelError),

    #[error("Stored selection '{key}' is unreadable: {reason}")]
    CorruptState { key: SelectionKey, reason: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SelectionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SelectionError::Storage(_) => ErrorCode::PersistenceFailure,
            SelectionError::Messaging(_) => ErrorCode::MessagingFailure,
            SelectionError::InvalidCandidates(_) => ErrorCode::InvalidCandidates,
            SelectionError::CorruptState { .. } => ErrorCode::CorruptState,
            SelectionError::Domain(err) => err.code,
        }
    }
}

/// Result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome<R> {
    /// The prompt was (re)shown; the selection continues.
    Pending { rejection: Option<TurnRejection> },
    /// A terminal transition ran; carries the continuation's return value.
    Completed(R),
}

impl<R> SelectionOutcome<R> {
    pub fn pending() -> Self {
        SelectionOutcome::Pending { rejection: None }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SelectionOutcome::Completed(_))
    }

    pub fn rejection(&self) -> Option<TurnRejection> {
        match self {
            SelectionOutcome::Pending { rejection } => *rejection,
            SelectionOutcome::Completed(_) => None,
        }
    }

    /// The continuation's value, if the selection completed.
    pub fn into_completed(self) -> Option<R> {
        match self {
            SelectionOutcome::Completed(value) => Some(value),
            SelectionOutcome::Pending { .. } => None,
        }
    }
}

/// Localized command captions.
pub(crate) fn command_captions(localizer: &dyn Localizer) -> CommandCaptions {
    CommandCaptions::new(
        localizer.text(LangKey::OkButton),
        localizer.text(LangKey::ClearButton),
        localizer.text(LangKey::AllButton),
        localizer.text(LangKey::BackButton),
    )
}

/// Prompt errors for a multi-value rejection.
pub(crate) fn multi_rejection_errors(
    localizer: &dyn Localizer,
    rejection: Option<TurnRejection>,
) -> FieldErrors {
    match rejection {
        None => FieldErrors::new(),
        Some(rejection @ TurnRejection::InvalidInput) => {
            FieldErrors::from_rejection(rejection, localizer.text(LangKey::WrongValueMultiple))
        }
        Some(rejection @ TurnRejection::EmptySelection) => {
            FieldErrors::from_rejection(rejection, localizer.text(LangKey::NothingSelected))
        }
    }
}

pub(crate) fn encode_record(
    key: &SelectionKey,
    record: &SelectionRecord,
) -> Result<Value, SelectionError> {
    serde_json::to_value(record).map_err(|e| {
        SelectionError::Storage(NoteStoreError::SerializationFailed {
            name: key.values_note(),
            reason: e.to_string(),
        })
    })
}

pub(crate) fn decode_record(key: &SelectionKey, raw: Value) -> Result<SelectionRecord, SelectionError> {
    serde_json::from_value(raw).map_err(|e| SelectionError::CorruptState {
        key: key.clone(),
        reason: e.to_string(),
    })
}
