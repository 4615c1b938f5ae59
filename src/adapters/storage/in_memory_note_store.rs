//! In-Memory Note Store Adapter
//!
//! Stores conversation notes in memory.
//! Useful for testing, development and single-process bots.

use async_trait::async_trait;
use chrono::Duration;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ConversationId, Timestamp};
use crate::ports::{ConversationNotes, NoteStoreError};

#[derive(Debug, Clone)]
struct StoredNote {
    value: Value,
    updated_at: Timestamp,
}

/// In-memory storage for conversation notes
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteStore {
    notes: Arc<RwLock<HashMap<(ConversationId, String), StoredNote>>>,
}

impl InMemoryNoteStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored notes (useful for tests)
    pub async fn clear(&self) {
        self.notes.write().await.clear();
    }

    /// Get the number of stored notes
    pub async fn note_count(&self) -> usize {
        self.notes.read().await.len()
    }

    /// Get the number of notes stored for one conversation
    pub async fn conversation_note_count(&self, conversation: &ConversationId) -> usize {
        self.notes
            .read()
            .await
            .keys()
            .filter(|(cid, _)| cid == conversation)
            .count()
    }

    /// Remove notes not written for longer than `max_age`.
    ///
    /// Returns the number of removed notes.
    pub async fn purge_stale(&self, max_age: Duration) -> usize {
        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|_, note| !note.updated_at.is_older_than(max_age));
        let purged = before - notes.len();
        if purged > 0 {
            tracing::debug!(purged, "Purged stale conversation notes");
        }
        purged
    }
}

#[async_trait]
impl ConversationNotes for InMemoryNoteStore {
    async fn get_note(
        &self,
        conversation: &ConversationId,
        name: &str,
    ) -> Result<Option<Value>, NoteStoreError> {
        let notes = self.notes.read().await;
        Ok(notes
            .get(&(conversation.clone(), name.to_string()))
            .map(|note| note.value.clone()))
    }

    async fn set_note(
        &self,
        conversation: &ConversationId,
        name: &str,
        value: Value,
    ) -> Result<(), NoteStoreError> {
        let mut notes = self.notes.write().await;
        notes.insert(
            (conversation.clone(), name.to_string()),
            StoredNote {
                value,
                updated_at: Timestamp::now(),
            },
        );
        Ok(())
    }

    async fn delete_note(
        &self,
        conversation: &ConversationId,
        name: &str,
    ) -> Result<(), NoteStoreError> {
        self.notes
            .write()
            .await
            .remove(&(conversation.clone(), name.to_string()));
        Ok(())
    }
}
