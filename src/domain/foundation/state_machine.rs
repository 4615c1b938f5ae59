//! State machine trait for phase enums.
//!
//! Selection phases implement this trait so handlers can check every
//! transition they perform against one table of legal moves.

use super::{DomainError, ErrorCode};

/// Trait for phase enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SingleSelectionPhase {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             NotStarted => vec![AwaitingChoice],
///             AwaitingChoice => vec![AwaitingChoice, Done],
///             Done => vec![],
///         }
///     }
/// }
///
/// let next = phase.transition_to(SingleSelectionPhase::Done)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target phases from the current phase.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current phase is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PromptPhase {
        Hidden,
        Shown,
        Removed,
    }

    impl StateMachine for PromptPhase {
        fn valid_transitions(&self) -> Vec<Self> {
            use PromptPhase::*;
            match self {
                Hidden => vec![Shown],
                Shown => vec![Shown, Removed],
                Removed => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(
            PromptPhase::Hidden.transition_to(PromptPhase::Shown).unwrap(),
            PromptPhase::Shown
        );
    }

    #[test]
    fn self_loop_is_allowed_when_listed() {
        assert!(PromptPhase::Shown.can_transition_to(&PromptPhase::Shown));
    }

    #[test]
    fn transition_to_fails_with_invalid_state_transition_code() {
        let err = PromptPhase::Hidden
            .transition_to(PromptPhase::Removed)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert!(err.message.contains("Hidden"));
    }

    #[test]
    fn is_terminal_only_for_phases_without_exits() {
        assert!(PromptPhase::Removed.is_terminal());
        assert!(!PromptPhase::Hidden.is_terminal());
        assert!(!PromptPhase::Shown.is_terminal());
    }
}
