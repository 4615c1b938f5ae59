//! Turn logic of the selection machines.
//!
//! These types decide what a turn does; they never touch storage or the
//! transport. Handlers load state, call `apply`, and carry out the decision.

use super::{
    CandidateModel, CommandCaptions, MultiSelectionPhase, SelectedValues, SelectionCommand,
    SelectionInput, SelectionValidator, SingleSelectionPhase, TurnRejection,
};
use crate::domain::foundation::{DomainError, StateMachine};

/// Outcome of one multi-value turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnDecision {
    /// Stay active and re-render. `changed` tells whether values must be
    /// persisted.
    Rerender {
        rejection: Option<TurnRejection>,
        changed: bool,
    },
    /// Confirm accepted; hand the values to the success continuation.
    Confirm,
    /// Back pressed; hand the partial values to the back continuation.
    Back,
}

/// Multi-value selection aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelection {
    values: SelectedValues,
    phase: MultiSelectionPhase,
}

impl MultiSelection {
    /// Starts a selection from an optional preselection.
    ///
    /// Returns the preselected values that were dropped because they are not
    /// candidates.
    pub fn start<I, S>(
        preselected: I,
        model: &CandidateModel,
    ) -> Result<(Self, Vec<String>), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phase = MultiSelectionPhase::NotStarted.transition_to(MultiSelectionPhase::Active)?;
        let (values, dropped) = SelectedValues::seeded(preselected, model);
        Ok((Self { values, phase }, dropped))
    }

    /// Resumes an active selection from persisted values.
    pub fn resume(values: SelectedValues) -> Self {
        Self {
            values,
            phase: MultiSelectionPhase::Active,
        }
    }

    pub fn values(&self) -> &SelectedValues {
        &self.values
    }

    pub fn phase(&self) -> MultiSelectionPhase {
        self.phase
    }

    pub fn into_values(self) -> SelectedValues {
        self.values
    }

    /// Applies one incoming text.
    ///
    /// Invalid text and empty Confirm leave the values untouched. Toggle,
    /// Clear and SelectAll mutate and stay active. Confirm and Back move to a
    /// terminal phase.
    pub fn apply(
        &mut self,
        text: &str,
        model: &CandidateModel,
        captions: &CommandCaptions,
        back_enabled: bool,
    ) -> Result<TurnDecision, DomainError> {
        let allowed = SelectionValidator::allowed_values(model, captions, back_enabled);
        if let Err(rejection) = SelectionValidator::check_membership(text, &allowed) {
            return self.stay(Some(rejection), false);
        }

        match SelectionInput::classify(text, model, captions, back_enabled) {
            SelectionInput::Candidate(value) => {
                self.values.toggle(&value);
                self.stay(None, true)
            }
            SelectionInput::Command(SelectionCommand::Clear) => {
                self.values.clear();
                self.stay(None, true)
            }
            SelectionInput::Command(SelectionCommand::SelectAll) => {
                self.values.select_all(model);
                self.stay(None, true)
            }
            SelectionInput::Command(SelectionCommand::Confirm) => {
                if let Err(rejection) = SelectionValidator::check_not_empty(&self.values) {
                    return self.stay(Some(rejection), false);
                }
                self.phase = self.phase.transition_to(MultiSelectionPhase::Confirmed)?;
                Ok(TurnDecision::Confirm)
            }
            SelectionInput::Command(SelectionCommand::Back) => {
                self.phase = self.phase.transition_to(MultiSelectionPhase::BackedOut)?;
                Ok(TurnDecision::Back)
            }
            SelectionInput::Unknown(_) => self.stay(Some(TurnRejection::InvalidInput), false),
        }
    }

    fn stay(
        &mut self,
        rejection: Option<TurnRejection>,
        changed: bool,
    ) -> Result<TurnDecision, DomainError> {
        self.phase = self.phase.transition_to(MultiSelectionPhase::Active)?;
        Ok(TurnDecision::Rerender { rejection, changed })
    }
}

/// Outcome of one single-value turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceDecision {
    Rerender { rejection: TurnRejection },
    Accept(String),
}

/// Single-value selection aggregate.
///
/// Holds no values: partial progress is never stored, only the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleSelection {
    phase: SingleSelectionPhase,
}

impl SingleSelection {
    /// A selection whose prompt has not been shown yet.
    pub fn not_started() -> Self {
        Self {
            phase: SingleSelectionPhase::NotStarted,
        }
    }

    /// A selection whose prompt is already on screen.
    pub fn awaiting_choice() -> Self {
        Self {
            phase: SingleSelectionPhase::AwaitingChoice,
        }
    }

    pub fn phase(&self) -> SingleSelectionPhase {
        self.phase
    }

    /// Marks the prompt as shown.
    pub fn show(&mut self) -> Result<(), DomainError> {
        self.phase = self.phase.transition_to(SingleSelectionPhase::AwaitingChoice)?;
        Ok(())
    }

    /// Checks `text` against the candidate values.
    pub fn apply(
        &mut self,
        text: &str,
        model: &CandidateModel,
    ) -> Result<ChoiceDecision, DomainError> {
        let allowed: Vec<String> = model.values().into_iter().map(str::to_string).collect();
        match SelectionValidator::check_membership(text, &allowed) {
            Ok(()) => {
                self.phase = self.phase.transition_to(SingleSelectionPhase::Done)?;
                Ok(ChoiceDecision::Accept(text.to_string()))
            }
            Err(rejection) => {
                self.phase = self
                    .phase
                    .transition_to(SingleSelectionPhase::AwaitingChoice)?;
                Ok(ChoiceDecision::Rerender { rejection })
            }
        }
    }
}
