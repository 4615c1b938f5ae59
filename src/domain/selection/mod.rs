//! Selection module - the interactive keyboard selection domain.
//!
//! A caller shows a grid of candidates and builds up a set (or picks a single
//! value) across several turns. This module holds the candidate model, the
//! command vocabulary, the persisted selection state, input validation,
//! keyboard rendering and the per-turn decision logic.
//!
//! # Module Organization
//!
//! - `candidates` - Candidate model (label/value tree)
//! - `command` - Control buttons and their captions
//! - `values` - Selected values and their persisted record
//! - `input` - Classification of incoming text
//! - `validation` - Membership and non-emptiness checks
//! - `keyboard` - Grid renderer
//! - `phase` - Lifecycle phases
//! - `machine` - Turn logic for single and multiple selection

mod candidates;
mod command;
mod input;
mod keyboard;
mod machine;
mod phase;
mod validation;
mod values;

#[cfg(test)]
mod proptests;

pub use candidates::{
    Candidate, CandidateModel, CandidateModelBuilder, CandidateModelError, CandidateNode,
};
pub use command::{CommandCaptions, SelectionCommand};
pub use input::SelectionInput;
pub use keyboard::{render_choices, render_selection, Keyboard, KeyboardButton, MultiSelectionView};
pub use machine::{ChoiceDecision, MultiSelection, SingleSelection, TurnDecision};
pub use phase::{MultiSelectionPhase, SingleSelectionPhase};
pub use validation::{FieldErrors, SelectionValidator, TurnRejection, TEXT_FIELD, VALUES_FIELD};
pub use values::{SelectedValues, SelectionRecord};
