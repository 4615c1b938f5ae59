//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the selection handlers to external systems:
//! - `storage` - Conversation note stores (in-memory, file, Redis)
//! - `messaging` - Prompt delivery (recording, console)
//! - `localization` - Caption and message catalogs

pub mod localization;
pub mod messaging;
pub mod storage;

pub use localization::{CatalogLocalizer, LocalizerError};
pub use messaging::{ConsoleMessenger, RecordingMessenger, SentPrompt};
pub use storage::{note_store_from_config, FileNoteStore, InMemoryNoteStore, RedisNoteStore};
