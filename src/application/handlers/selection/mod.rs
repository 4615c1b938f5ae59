//! Selection command handlers.

mod common;
mod select_many;
mod select_one;

pub use common::{SelectionError, SelectionOutcome};
pub use select_many::{
    MultiSelectionCallbacks, MultiSelectionOptions, SaveHook, SelectManyCommand,
    SelectManyHandler, ValuesContinuation,
};
pub use select_one::{SelectOneCommand, SelectOneHandler, SingleSelectionOptions};
