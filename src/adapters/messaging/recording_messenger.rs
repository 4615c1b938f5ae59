//! In-memory messenger that records every prompt for later inspection.
//!
//! Useful for tests and for embedding the handlers where delivery happens
//! elsewhere: the caller reads the recorded prompt and ships it itself.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ConversationId, MessageId, SelectionKey, Timestamp};
use crate::ports::{MessageKind, MessengerError, PendingPrompt, Prompt, PromptMessenger};

/// A prompt as it was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentPrompt {
    pub conversation: ConversationId,
    pub key: SelectionKey,
    pub message_id: MessageId,
    pub kind: MessageKind,
    pub prompt: Prompt,
}

#[derive(Debug, Default)]
struct MessengerState {
    pending: HashMap<(ConversationId, SelectionKey), PendingPrompt>,
    sent: Vec<SentPrompt>,
    deleted: Vec<(ConversationId, MessageId)>,
    refuse_deletes: bool,
}

/// Messenger that keeps prompts in memory.
///
/// A prompt for a key with a pending prompt edits that message (same id);
/// otherwise a new message id is generated. Deletes can be switched to fail,
/// the way a transport refuses to delete messages that are too old.
///
/// # Example
///
/// ```ignore
/// let messenger = Arc::new(RecordingMessenger::new());
/// handler.handle(cmd, callbacks).await?;
/// let prompt = messenger.last_prompt().await.unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingMessenger {
    state: Arc<RwLock<MessengerState>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    // === Inspection helpers ===

    /// The most recently delivered prompt.
    pub async fn last_prompt(&self) -> Option<SentPrompt> {
        self.state.read().await.sent.last().cloned()
    }

    pub async fn sent_count(&self) -> usize {
        self.state.read().await.sent.len()
    }

    /// Make `delete_message` fail with `DeleteFailed` until switched back.
    pub async fn refuse_deletes(&self, refuse: bool) {
        self.state.write().await.refuse_deletes = refuse;
    }

    /// Messages removed through `delete_message`.
    pub async fn deleted_messages(&self) -> Vec<MessageId> {
        self.state
            .read()
            .await
            .deleted
            .iter()
            .map(|(_, id)| id.clone())
            .collect()
    }
}

#[async_trait]
impl PromptMessenger for RecordingMessenger {
    async fn show_prompt(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
        prompt: &Prompt,
    ) -> Result<PendingPrompt, MessengerError> {
        let mut state = self.state.write().await;
        let slot = (conversation.clone(), key.clone());

        let (message_id, kind) = match state.pending.get(&slot) {
            Some(previous) => (previous.message_id.clone(), MessageKind::Edited),
            None => (MessageId::generate(), MessageKind::Sent),
        };

        let pending = PendingPrompt {
            message_id: message_id.clone(),
            kind,
            shown_at: Timestamp::now(),
        };
        state.pending.insert(slot, pending.clone());
        state.sent.push(SentPrompt {
            conversation: conversation.clone(),
            key: key.clone(),
            message_id,
            kind,
            prompt: prompt.clone(),
        });

        Ok(pending)
    }

    async fn pending_prompt(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
    ) -> Result<Option<PendingPrompt>, MessengerError> {
        let state = self.state.read().await;
        Ok(state
            .pending
            .get(&(conversation.clone(), key.clone()))
            .cloned())
    }

    async fn forget_pending_prompt(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
    ) -> Result<(), MessengerError> {
        let mut state = self.state.write().await;
        state.pending.remove(&(conversation.clone(), key.clone()));
        Ok(())
    }

    async fn delete_message(
        &self,
        conversation: &ConversationId,
        message_id: &MessageId,
    ) -> Result<(), MessengerError> {
        let mut state = self.state.write().await;
        if state.refuse_deletes {
            return Err(MessengerError::DeleteFailed {
                message_id: message_id.clone(),
                reason: "message can no longer be deleted".to_string(),
            });
        }
        state
            .deleted
            .push((conversation.clone(), message_id.clone()));
        Ok(())
    }
}
