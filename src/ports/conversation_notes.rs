//! Conversation Notes Port - Scoped key/value persistence for selections.
//!
//! A note is a named JSON value attached to one conversation. Selections keep
//! their in-flight state in notes derived from their `SelectionKey`.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::ConversationId;

/// Errors that can occur during note store operations
#[derive(Debug, thiserror::Error)]
pub enum NoteStoreError {
    #[error("Failed to serialize note '{name}': {reason}")]
    SerializationFailed { name: String, reason: String },

    #[error("Failed to deserialize note '{name}': {reason}")]
    DeserializationFailed { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Note store unavailable: {0}")]
    Unavailable(String),
}

/// Port for conversation-scoped note persistence
///
/// Implementations must isolate conversations from each other: a note
/// written for one conversation is never visible from another.
#[async_trait]
pub trait ConversationNotes: Send + Sync {
    /// Read a note
    ///
    /// # Returns
    /// `None` when the note does not exist
    async fn get_note(
        &self,
        conversation: &ConversationId,
        name: &str,
    ) -> Result<Option<Value>, NoteStoreError>;

    /// Create or overwrite a note
    async fn set_note(
        &self,
        conversation: &ConversationId,
        name: &str,
        value: Value,
    ) -> Result<(), NoteStoreError>;

    /// Delete a note. Deleting a missing note is not an error.
    async fn delete_note(&self, conversation: &ConversationId, name: &str)
        -> Result<(), NoteStoreError>;

    /// Check if a note exists
    async fn has_note(
        &self,
        conversation: &ConversationId,
        name: &str,
    ) -> Result<bool, NoteStoreError> {
        Ok(self.get_note(conversation, name).await?.is_some())
    }
}
