//! Application handlers.
//!
//! Command handlers that run one selection turn against the ports.

pub mod selection;

pub use selection::{
    MultiSelectionCallbacks, MultiSelectionOptions, SaveHook, SelectManyCommand,
    SelectManyHandler, SelectOneCommand, SelectOneHandler, SelectionError, SelectionOutcome,
    SingleSelectionOptions, ValuesContinuation,
};
