//! Storage Adapters
//!
//! Implementations of the ConversationNotes port.
//!
//! ## Available Adapters
//!
//! - **InMemoryNoteStore** - Notes in process memory (testing/development)
//! - **FileNoteStore** - Notes as YAML files on disk
//! - **RedisNoteStore** - Notes as JSON strings in Redis with a TTL
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::note_store_from_config;
//!
//! let notes = note_store_from_config(&config.storage).await?;
//! ```

mod file_note_store;
mod in_memory_note_store;
mod redis_note_store;

pub use file_note_store::FileNoteStore;
pub use in_memory_note_store::InMemoryNoteStore;
pub use redis_note_store::RedisNoteStore;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::{ConversationNotes, NoteStoreError};

/// Build the note store selected by configuration.
pub async fn note_store_from_config(
    config: &StorageConfig,
) -> Result<Arc<dyn ConversationNotes>, NoteStoreError> {
    let store: Arc<dyn ConversationNotes> = match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryNoteStore::new()),
        StorageBackend::File => Arc::new(FileNoteStore::new(&config.data_dir)),
        StorageBackend::Redis => Arc::new(RedisNoteStore::connect(&config.redis).await?),
    };
    tracing::debug!(backend = ?config.backend, "note store ready");
    Ok(store)
}
