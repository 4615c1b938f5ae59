//! Messenger that prints prompts as plain text.
//!
//! Drives the console demo: each prompt is written as its text, any error
//! lines, then one line per keyboard row with `[label]` buttons.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::domain::foundation::{ConversationId, MessageId, SelectionKey, Timestamp};
use crate::ports::{MessageKind, MessengerError, PendingPrompt, Prompt, PromptMessenger};

/// Console messenger over any async writer.
pub struct ConsoleMessenger<W> {
    out: Mutex<W>,
    pending: Mutex<HashMap<(ConversationId, SelectionKey), PendingPrompt>>,
}

impl ConsoleMessenger<tokio::io::Stdout> {
    /// Messenger writing to standard output.
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> ConsoleMessenger<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Consume the messenger and hand back the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    async fn write(&self, text: &str) -> Result<(), std::io::Error> {
        let mut out = self.out.lock().await;
        out.write_all(text.as_bytes()).await?;
        out.flush().await
    }
}

/// Text form of a prompt.
pub fn format_prompt(prompt: &Prompt) -> String {
    let mut text = String::new();
    text.push_str(&prompt.text);
    text.push('\n');
    for message in prompt.errors.messages() {
        text.push_str("! ");
        text.push_str(message);
        text.push('\n');
    }
    for row in prompt.keyboard.rows() {
        let buttons: Vec<String> = row
            .iter()
            .map(|button| format!("[{}]", button.text))
            .collect();
        text.push_str(&buttons.join(" "));
        text.push('\n');
    }
    text
}

#[async_trait]
impl<W> PromptMessenger for ConsoleMessenger<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn show_prompt(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
        prompt: &Prompt,
    ) -> Result<PendingPrompt, MessengerError> {
        self.write(&format_prompt(prompt))
            .await
            .map_err(|e| MessengerError::SendFailed(e.to_string()))?;

        // A terminal cannot edit earlier output; every prompt is a new message.
        let pending = PendingPrompt {
            message_id: MessageId::generate(),
            kind: MessageKind::Sent,
            shown_at: Timestamp::now(),
        };
        self.pending
            .lock()
            .await
            .insert((conversation.clone(), key.clone()), pending.clone());
        Ok(pending)
    }

    async fn pending_prompt(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
    ) -> Result<Option<PendingPrompt>, MessengerError> {
        Ok(self
            .pending
            .lock()
            .await
            .get(&(conversation.clone(), key.clone()))
            .cloned())
    }

    async fn forget_pending_prompt(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
    ) -> Result<(), MessengerError> {
        self.pending
            .lock()
            .await
            .remove(&(conversation.clone(), key.clone()));
        Ok(())
    }

    async fn delete_message(
        &self,
        _conversation: &ConversationId,
        message_id: &MessageId,
    ) -> Result<(), MessengerError> {
        tracing::debug!(message_id = %message_id, "console cannot delete output, skipping");
        Ok(())
    }
}
