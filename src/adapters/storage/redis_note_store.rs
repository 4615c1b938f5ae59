//! Redis-backed note store for multi-instance deployments.
//!
//! Each note is one JSON string under `{prefix}:{conversation}:{note}`. Every
//! write sets the value and refreshes the key's TTL in a single `SET ... EX`,
//! so abandoned selections expire on their own.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use serde_json::Value;

use crate::config::RedisConfig;
use crate::domain::foundation::ConversationId;
use crate::ports::{ConversationNotes, NoteStoreError};

/// Redis-backed conversation notes.
#[derive(Clone)]
pub struct RedisNoteStore {
    conn: MultiplexedConnection,
    key_prefix: String,
    ttl_secs: u64,
}

impl RedisNoteStore {
    /// Create a store over an existing connection.
    pub fn new(conn: MultiplexedConnection, key_prefix: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
            ttl_secs,
        }
    }

    /// Open a connection from configuration.
    pub async fn connect(config: &RedisConfig) -> Result<Self, NoteStoreError> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| NoteStoreError::Unavailable(e.to_string()))?;

        let conn = tokio::time::timeout(config.timeout(), client.get_multiplexed_tokio_connection())
            .await
            .map_err(|_| NoteStoreError::Unavailable("connection timed out".to_string()))?
            .map_err(|e| NoteStoreError::Unavailable(e.to_string()))?;

        Ok(Self::new(conn, config.key_prefix.clone(), config.ttl_secs))
    }

    fn redis_key(&self, conversation: &ConversationId, name: &str) -> String {
        note_key(&self.key_prefix, conversation, name)
    }
}

fn note_key(prefix: &str, conversation: &ConversationId, name: &str) -> String {
    format!("{}:{}:{}", prefix, conversation, name)
}

/// `SET key value EX ttl`: value and expiry land in one command.
fn set_with_ttl(key: &str, json: &str, ttl_secs: u64) -> redis::Cmd {
    let mut cmd = redis::cmd("SET");
    cmd.arg(key).arg(json).arg("EX").arg(ttl_secs);
    cmd
}

#[async_trait]
impl ConversationNotes for RedisNoteStore {
    async fn get_note(
        &self,
        conversation: &ConversationId,
        name: &str,
    ) -> Result<Option<Value>, NoteStoreError> {
        let key = self.redis_key(conversation, name);
        let mut conn = self.conn.clone();

        let raw: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e: redis::RedisError| NoteStoreError::Unavailable(e.to_string()))?;

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|e| NoteStoreError::DeserializationFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
    }

    async fn set_note(
        &self,
        conversation: &ConversationId,
        name: &str,
        value: Value,
    ) -> Result<(), NoteStoreError> {
        let key = self.redis_key(conversation, name);
        let json =
            serde_json::to_string(&value).map_err(|e| NoteStoreError::SerializationFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        let mut conn = self.conn.clone();
        set_with_ttl(&key, &json, self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e: redis::RedisError| NoteStoreError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn delete_note(
        &self,
        conversation: &ConversationId,
        name: &str,
    ) -> Result<(), NoteStoreError> {
        let key = self.redis_key(conversation, name);
        let mut conn = self.conn.clone();

        conn.del::<_, ()>(&key)
            .await
            .map_err(|e: redis::RedisError| NoteStoreError::Unavailable(e.to_string()))?;

        Ok(())
    }
}

impl std::fmt::Debug for RedisNoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisNoteStore")
            .field("key_prefix", &self.key_prefix)
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_key_layout() {
        let conversation = ConversationId::new("chat-7").unwrap();
        assert_eq!(
            note_key("selection", &conversation, "colours_values"),
            "selection:chat-7:colours_values"
        );
    }

    #[test]
    fn test_set_carries_expiry_in_the_same_command() {
        let packed = set_with_ttl("selection:chat-7:colours_values", "[\"r\"]", 600)
            .get_packed_command();
        let packed = String::from_utf8(packed).unwrap();

        assert!(packed.starts_with("*5\r\n$3\r\nSET\r\n"));
        assert!(packed.contains("$2\r\nEX\r\n$3\r\n600\r\n"));
    }

    // Round-trip tests need a running Redis instance:
    //
    // #[tokio::test]
    // #[ignore] // Run with: cargo test -- --ignored
    // async fn test_redis_note_store() {
    //     let client = redis::Client::open("redis://127.0.0.1/").unwrap();
    //     let conn = client.get_multiplexed_tokio_connection().await.unwrap();
    //     let store = RedisNoteStore::new(conn, "test", 60);
    //     // ... test code
    // }
}
