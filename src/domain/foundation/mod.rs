//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types and the phase state machine
//! trait that form the vocabulary of the selection domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ConversationId, MessageId, SelectionKey};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
