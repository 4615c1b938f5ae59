//! Domain layer containing selection logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine trait)
//! - `selection` - Candidate grids, selection state and turn logic

pub mod foundation;
pub mod selection;
