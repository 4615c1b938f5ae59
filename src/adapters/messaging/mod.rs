//! Messaging Adapters
//!
//! Implementations of the PromptMessenger port.
//!
//! - **RecordingMessenger** - Keeps prompts in memory (tests, embedding)
//! - **ConsoleMessenger** - Prints prompts to a writer (console demo)

mod console_messenger;
mod recording_messenger;

pub use console_messenger::{format_prompt, ConsoleMessenger};
pub use recording_messenger::{RecordingMessenger, SentPrompt};
