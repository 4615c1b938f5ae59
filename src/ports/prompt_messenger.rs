//! Prompt Messenger Port - Delivery of selection prompts.
//!
//! The messenger sends the rendered keyboard, replaces it on later turns,
//! deletes it on request and remembers the last prompt it showed for each
//! selection key (the pending prompt).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, MessageId, SelectionKey, Timestamp};
use crate::domain::selection::{FieldErrors, Keyboard};

/// Errors that can occur while delivering prompts
#[derive(Debug, thiserror::Error)]
pub enum MessengerError {
    #[error("Failed to send prompt: {0}")]
    SendFailed(String),

    #[error("Failed to delete message {message_id}: {reason}")]
    DeleteFailed {
        message_id: MessageId,
        reason: String,
    },
}

/// How the pending prompt was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Sent as a new message.
    Sent,
    /// An earlier message edited in place.
    Edited,
}

/// Reference to the last prompt shown for a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPrompt {
    pub message_id: MessageId,
    pub kind: MessageKind,
    pub shown_at: Timestamp,
}

/// Everything needed to show one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub errors: FieldErrors,
    pub keyboard: Keyboard,
}

/// Port for showing, replacing and removing selection prompts
#[async_trait]
pub trait PromptMessenger: Send + Sync {
    /// Show a prompt, replacing the pending one for `key` if any, and record
    /// it as the new pending prompt.
    async fn show_prompt(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
        prompt: &Prompt,
    ) -> Result<PendingPrompt, MessengerError>;

    /// The pending prompt for `key`, if one was shown and not forgotten.
    async fn pending_prompt(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
    ) -> Result<Option<PendingPrompt>, MessengerError>;

    /// Drop the pending-prompt reference for `key`. The message itself stays.
    async fn forget_pending_prompt(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
    ) -> Result<(), MessengerError>;

    /// Delete a message from the conversation.
    async fn delete_message(
        &self,
        conversation: &ConversationId,
        message_id: &MessageId,
    ) -> Result<(), MessengerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_failed_names_message() {
        let err = MessengerError::DeleteFailed {
            message_id: MessageId::new("77").unwrap(),
            reason: "message too old".to_string(),
        };
        assert!(err.to_string().contains("77"));
        assert!(err.to_string().contains("too old"));
    }
}
