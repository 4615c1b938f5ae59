//! SelectOneHandler - One turn of a single-value selection.
//!
//! The pending prompt is the only progress marker: no prompt means the grid
//! has not been shown yet. Nothing is stored before a valid choice arrives.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::common::{SelectionError, SelectionOutcome};
use crate::config::SelectionDefaults;
use crate::domain::foundation::{ConversationId, SelectionKey};
use crate::domain::selection::{
    render_choices, CandidateModel, ChoiceDecision, FieldErrors, SingleSelection,
};
use crate::ports::{ConversationNotes, LangKey, Localizer, Prompt, PromptMessenger};

/// Per-call options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleSelectionOptions {
    /// Delete the prompt message once a value is accepted.
    pub delete_prompt: bool,
    /// Also store the accepted value in the `<key>_result` note, for callers
    /// still reading it through [`SelectOneHandler::stored_result`].
    pub persist_result: bool,
}

impl SingleSelectionOptions {
    pub fn from_defaults(defaults: &SelectionDefaults) -> Self {
        Self {
            delete_prompt: defaults.delete_prompt_on_choice,
            persist_result: defaults.persist_single_result,
        }
    }
}

/// Command for one single-value turn.
#[derive(Debug, Clone)]
pub struct SelectOneCommand {
    pub conversation_id: ConversationId,
    pub key: SelectionKey,
    pub candidates: CandidateModel,
    pub prompt_text: String,
    /// Text of the incoming message or button press.
    pub input: String,
    pub options: SingleSelectionOptions,
}

/// Handler for single-value selections.
pub struct SelectOneHandler {
    notes: Arc<dyn ConversationNotes>,
    messenger: Arc<dyn PromptMessenger>,
    localizer: Arc<dyn Localizer>,
}

impl SelectOneHandler {
    pub fn new(
        notes: Arc<dyn ConversationNotes>,
        messenger: Arc<dyn PromptMessenger>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            notes,
            messenger,
            localizer,
        }
    }

    pub async fn handle<R>(
        &self,
        cmd: SelectOneCommand,
        on_result: impl FnOnce(String) -> R + Send,
    ) -> Result<SelectionOutcome<R>, SelectionError> {
        let pending = self
            .messenger
            .pending_prompt(&cmd.conversation_id, &cmd.key)
            .await?;

        // First turn: show the grid and wait
        let Some(pending) = pending else {
            let mut selection = SingleSelection::not_started();
            selection.show()?;
            self.show(&cmd, FieldErrors::new()).await?;
            debug!(
                conversation = %cmd.conversation_id,
                key = %cmd.key,
                "choice prompt shown"
            );
            return Ok(SelectionOutcome::pending());
        };

        let mut selection = SingleSelection::awaiting_choice();
        match selection.apply(&cmd.input, &cmd.candidates)? {
            ChoiceDecision::Rerender { rejection } => {
                warn!(
                    conversation = %cmd.conversation_id,
                    key = %cmd.key,
                    input = %cmd.input,
                    "choice rejected"
                );
                let errors = FieldErrors::from_rejection(
                    rejection,
                    self.localizer.text(LangKey::WrongValueSingle),
                );
                self.show(&cmd, errors).await?;
                Ok(SelectionOutcome::Pending {
                    rejection: Some(rejection),
                })
            }
            ChoiceDecision::Accept(value) => {
                if cmd.options.persist_result {
                    self.notes
                        .set_note(
                            &cmd.conversation_id,
                            &cmd.key.result_note(),
                            Value::String(value.clone()),
                        )
                        .await?;
                }

                self.messenger
                    .forget_pending_prompt(&cmd.conversation_id, &cmd.key)
                    .await?;
                if cmd.options.delete_prompt {
                    self.messenger
                        .delete_message(&cmd.conversation_id, &pending.message_id)
                        .await?;
                }

                info!(
                    conversation = %cmd.conversation_id,
                    key = %cmd.key,
                    value = %value,
                    "choice accepted"
                );
                Ok(SelectionOutcome::Completed(on_result(value)))
            }
        }
    }

    /// Value stored by a selection that ran with `persist_result`.
    #[deprecated(note = "hand the value to the result continuation instead")]
    pub async fn stored_result(
        &self,
        conversation: &ConversationId,
        key: &SelectionKey,
    ) -> Result<Option<String>, SelectionError> {
        match self.notes.get_note(conversation, &key.result_note()).await? {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => Err(SelectionError::CorruptState {
                key: key.clone(),
                reason: format!("expected a string, found {}", other),
            }),
        }
    }

    async fn show(&self, cmd: &SelectOneCommand, errors: FieldErrors) -> Result<(), SelectionError> {
        let prompt = Prompt {
            text: cmd.prompt_text.clone(),
            errors,
            keyboard: render_choices(&cmd.candidates),
        };
        self.messenger
            .show_prompt(&cmd.conversation_id, &cmd.key, &prompt)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::adapters::{CatalogLocalizer, InMemoryNoteStore, RecordingMessenger};
    use crate::domain::selection::{TurnRejection, TEXT_FIELD};
    use crate::ports::MessageKind;
    use serde_json::json;

    struct Fixture {
        notes: Arc<InMemoryNoteStore>,
        messenger: Arc<RecordingMessenger>,
        handler: SelectOneHandler,
    }

    fn fixture() -> Fixture {
        let notes = Arc::new(InMemoryNoteStore::new());
        let messenger = Arc::new(RecordingMessenger::new());
        let handler = SelectOneHandler::new(
            notes.clone(),
            messenger.clone(),
            Arc::new(CatalogLocalizer::english()),
        );
        Fixture {
            notes,
            messenger,
            handler,
        }
    }

    fn chat() -> ConversationId {
        ConversationId::new("chat-1").unwrap()
    }

    fn key() -> SelectionKey {
        SelectionKey::new("size").unwrap()
    }

    fn turn(input: &str) -> SelectOneCommand {
        SelectOneCommand {
            conversation_id: chat(),
            key: key(),
            candidates: CandidateModel::builder()
                .row([("Small", "s"), ("Medium", "m")])
                .row([("Large", "l")])
                .build()
                .unwrap(),
            prompt_text: "Pick a size".to_string(),
            input: input.to_string(),
            options: SingleSelectionOptions::default(),
        }
    }

    #[tokio::test]
    async fn first_turn_only_shows_the_grid() {
        let f = fixture();

        // Even a valid value is not accepted before the prompt was shown
        let outcome = f.handler.handle(turn("s"), |v| v).await.unwrap();

        assert_eq!(outcome, SelectionOutcome::pending());
        let prompt = f.messenger.last_prompt().await.unwrap().prompt;
        assert_eq!(prompt.keyboard.texts(), ["Small", "Medium", "Large"]);
        assert_eq!(prompt.keyboard.rows().len(), 2);
        assert!(prompt.errors.is_empty());
    }

    #[tokio::test]
    async fn wrong_value_reprompts_in_place() {
        let f = fixture();
        f.handler.handle(turn(""), |v| v).await.unwrap();

        let outcome = f.handler.handle(turn("xl"), |v| v).await.unwrap();

        assert_eq!(outcome.rejection(), Some(TurnRejection::InvalidInput));
        let sent = f.messenger.last_prompt().await.unwrap();
        assert_eq!(sent.kind, MessageKind::Edited);
        assert_eq!(
            sent.prompt.errors.get(TEXT_FIELD).unwrap(),
            ["Please choose one of the offered values."]
        );
    }

    #[tokio::test]
    async fn labels_are_not_values() {
        let f = fixture();
        f.handler.handle(turn(""), |v| v).await.unwrap();

        let outcome = f.handler.handle(turn("Small"), |v| v).await.unwrap();

        assert!(!outcome.is_complete());
    }

    #[tokio::test]
    async fn valid_choice_completes_without_storing() {
        let f = fixture();
        f.handler.handle(turn(""), |v| v).await.unwrap();

        let outcome = f
            .handler
            .handle(turn("m"), |v| format!("picked {v}"))
            .await
            .unwrap();

        assert_eq!(outcome, SelectionOutcome::Completed("picked m".to_string()));
        assert_eq!(f.notes.note_count().await, 0);
        assert!(f
            .messenger
            .pending_prompt(&chat(), &key())
            .await
            .unwrap()
            .is_none());
        assert!(f.messenger.deleted_messages().await.is_empty());
    }

    #[tokio::test]
    async fn delete_prompt_removes_the_message() {
        let f = fixture();
        let cmd = |input: &str| SelectOneCommand {
            options: SingleSelectionOptions {
                delete_prompt: true,
                ..SingleSelectionOptions::default()
            },
            ..turn(input)
        };
        f.handler.handle(cmd(""), |v| v).await.unwrap();
        let shown = f.messenger.last_prompt().await.unwrap().message_id;

        f.handler.handle(cmd("l"), |v| v).await.unwrap();

        assert_eq!(f.messenger.deleted_messages().await, vec![shown]);
    }

    #[tokio::test]
    async fn persisted_result_can_be_read_back() {
        let f = fixture();
        let cmd = |input: &str| SelectOneCommand {
            options: SingleSelectionOptions {
                persist_result: true,
                ..SingleSelectionOptions::default()
            },
            ..turn(input)
        };
        f.handler.handle(cmd(""), |v| v).await.unwrap();
        assert_eq!(f.handler.stored_result(&chat(), &key()).await.unwrap(), None);

        f.handler.handle(cmd("s"), |v| v).await.unwrap();

        assert_eq!(
            f.handler.stored_result(&chat(), &key()).await.unwrap(),
            Some("s".to_string())
        );
    }

    #[tokio::test]
    async fn non_string_result_is_corrupt() {
        let f = fixture();
        f.notes
            .set_note(&chat(), "size_result", json!({"values": []}))
            .await
            .unwrap();

        let err = f.handler.stored_result(&chat(), &key()).await.unwrap_err();

        assert!(matches!(err, SelectionError::CorruptState { .. }));
    }

    #[tokio::test]
    async fn selection_can_run_again_after_completion() {
        let f = fixture();
        f.handler.handle(turn(""), |v| v).await.unwrap();
        f.handler.handle(turn("s"), |v| v).await.unwrap();

        let outcome = f.handler.handle(turn("m"), |v| v).await.unwrap();

        assert_eq!(outcome, SelectionOutcome::pending());
        assert_eq!(f.messenger.sent_count().await, 2);
    }
}
