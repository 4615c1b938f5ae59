//! Lifecycle phases of the two selection machines.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Phases of a multi-value selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSelectionPhase {
    /// No selection record exists for the key.
    NotStarted,
    /// Record exists; every turn toggles, bulk-edits or re-prompts.
    Active,
    /// Confirm accepted a non-empty selection.
    Confirmed,
    /// Back handed the partial selection to the back continuation.
    BackedOut,
}

impl StateMachine for MultiSelectionPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        use MultiSelectionPhase::*;
        match self {
            NotStarted => vec![Active],
            Active => vec![Active, Confirmed, BackedOut],
            Confirmed | BackedOut => vec![],
        }
    }
}

/// Phases of a single-value selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleSelectionPhase {
    /// No prompt has been shown for the key.
    NotStarted,
    /// Prompt shown, waiting for a valid candidate.
    AwaitingChoice,
    /// A candidate was accepted.
    Done,
}

impl StateMachine for SingleSelectionPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        use SingleSelectionPhase::*;
        match self {
            NotStarted => vec![AwaitingChoice],
            AwaitingChoice => vec![AwaitingChoice, Done],
            Done => vec![],
        }
    }
}
