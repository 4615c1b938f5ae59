//! File-based Note Store Adapter
//!
//! Stores conversation notes as YAML files on disk, one directory per
//! conversation and one file per note. Organized for easy navigation and
//! debugging.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{ConversationId, Timestamp};
use crate::ports::{ConversationNotes, NoteStoreError};

/// On-disk representation of a note
#[derive(Debug, Serialize, Deserialize)]
struct NoteFile {
    value: Value,
    updated_at: Timestamp,
}

/// File-based storage for conversation notes
#[derive(Debug, Clone)]
pub struct FileNoteStore {
    base_path: PathBuf,
}

impl FileNoteStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileNoteStore::new("./data/selections");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the directory path for a specific conversation
    fn conversation_dir(&self, conversation: &ConversationId) -> PathBuf {
        self.base_path.join(path_segment(conversation.as_str()))
    }

    /// Get the file path for a note
    fn note_path(&self, conversation: &ConversationId, name: &str) -> PathBuf {
        self.conversation_dir(conversation)
            .join(format!("{}.yaml", path_segment(name)))
    }
}

/// Escapes everything but `[A-Za-z0-9_-]` so ids cannot traverse directories.
fn path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

#[async_trait]
impl ConversationNotes for FileNoteStore {
    async fn get_note(
        &self,
        conversation: &ConversationId,
        name: &str,
    ) -> Result<Option<Value>, NoteStoreError> {
        let file_path = self.note_path(conversation, name);

        if !file_path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| NoteStoreError::IoError(e.to_string()))?;

        let note: NoteFile =
            serde_yaml::from_str(&yaml).map_err(|e| NoteStoreError::DeserializationFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Some(note.value))
    }

    async fn set_note(
        &self,
        conversation: &ConversationId,
        name: &str,
        value: Value,
    ) -> Result<(), NoteStoreError> {
        let dir = self.conversation_dir(conversation);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| NoteStoreError::IoError(e.to_string()))?;

        let note = NoteFile {
            value,
            updated_at: Timestamp::now(),
        };
        let yaml = serde_yaml::to_string(&note).map_err(|e| NoteStoreError::SerializationFailed {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        // Write to a sibling file first so readers never see a half-written note
        let file_path = self.note_path(conversation, name);
        let tmp_path = file_path.with_extension("yaml.tmp");
        fs::write(&tmp_path, yaml)
            .await
            .map_err(|e| NoteStoreError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| NoteStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn delete_note(
        &self,
        conversation: &ConversationId,
        name: &str,
    ) -> Result<(), NoteStoreError> {
        let file_path = self.note_path(conversation, name);

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| NoteStoreError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn chat(id: &str) -> ConversationId {
        ConversationId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileNoteStore::new(temp_dir.path());

        store
            .set_note(&chat("42"), "colours_result", json!({"values": ["r", "b"]}))
            .await
            .unwrap();

        let loaded = store.get_note(&chat("42"), "colours_result").await.unwrap();
        assert_eq!(loaded, Some(json!({"values": ["r", "b"]})));
    }

    #[tokio::test]
    async fn test_file_store_missing_note() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileNoteStore::new(temp_dir.path());

        assert!(store.get_note(&chat("42"), "nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileNoteStore::new(temp_dir.path());

        store.set_note(&chat("42"), "n", json!("x")).await.unwrap();
        store.delete_note(&chat("42"), "n").await.unwrap();

        assert!(!store.has_note(&chat("42"), "n").await.unwrap());
        assert!(store.delete_note(&chat("42"), "n").await.is_ok());
    }

    #[tokio::test]
    async fn test_file_store_escapes_path_components() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileNoteStore::new(temp_dir.path());

        store
            .set_note(&chat("../escape"), "a/b", json!(1))
            .await
            .unwrap();

        let expected = temp_dir.path().join("%2E%2E%2Fescape").join("a%2Fb.yaml");
        assert!(expected.exists());
        assert_eq!(
            store.get_note(&chat("../escape"), "a/b").await.unwrap(),
            Some(json!(1))
        );
    }

    #[tokio::test]
    async fn test_file_store_corrupt_note() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileNoteStore::new(temp_dir.path());

        let dir = temp_dir.path().join("42");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("n.yaml"), "::: not yaml :::").unwrap();

        let result = store.get_note(&chat("42"), "n").await;
        assert!(matches!(
            result,
            Err(NoteStoreError::DeserializationFailed { .. })
        ));
    }

    #[test]
    fn test_path_segment_keeps_safe_characters() {
        assert_eq!(path_segment("chat-42_a"), "chat-42_a");
        assert_eq!(path_segment("a b"), "a%20b");
    }
}
