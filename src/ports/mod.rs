//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the selection machines and the outside world. Adapters implement these
//! ports.
//!
//! - `ConversationNotes` - Conversation-scoped note persistence
//! - `PromptMessenger` - Prompt delivery and pending-prompt tracking
//! - `Localizer` - Fixed captions and error messages

mod conversation_notes;
mod localizer;
mod prompt_messenger;

pub use conversation_notes::{ConversationNotes, NoteStoreError};
pub use localizer::{LangKey, Localizer};
pub use prompt_messenger::{MessageKind, MessengerError, PendingPrompt, Prompt, PromptMessenger};
