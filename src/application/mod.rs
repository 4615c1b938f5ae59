//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler call is one turn of a selection.

pub mod handlers;

pub use handlers::{
    MultiSelectionCallbacks, MultiSelectionOptions, SelectManyCommand, SelectManyHandler,
    SelectOneCommand, SelectOneHandler, SelectionError, SelectionOutcome, SingleSelectionOptions,
};
