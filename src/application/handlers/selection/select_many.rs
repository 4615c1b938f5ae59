//! SelectManyHandler - One turn of a multi-value selection.
//!
//! The in-flight values live in the `<key>_values` note. Absence of that note
//! means the selection has not started: the turn seeds it and shows the
//! prompt. Confirm and Back remove the note and the pending-prompt reference
//! before the continuation runs.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::common::{
    command_captions, decode_record, encode_record, multi_rejection_errors, SelectionError,
    SelectionOutcome,
};
use crate::config::SelectionDefaults;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, SelectionKey};
use crate::domain::selection::{
    render_selection, CandidateModel, CommandCaptions, FieldErrors, MultiSelection,
    MultiSelectionView, SelectedValues, SelectionRecord, TurnDecision,
};
use crate::ports::{ConversationNotes, LangKey, Localizer, Prompt, PromptMessenger};

/// Continuation receiving the selected values.
pub type ValuesContinuation<'a, R> = Box<dyn FnOnce(Vec<String>) -> R + Send + 'a>;

/// Hook receiving the final values before either continuation.
pub type SaveHook<'a> = Box<dyn FnOnce(&[String]) + Send + 'a>;

/// Caller continuations for a multi-value selection.
///
/// Back is offered only when a back continuation is set.
pub struct MultiSelectionCallbacks<'a, R> {
    on_success: ValuesContinuation<'a, R>,
    on_back: Option<ValuesContinuation<'a, R>>,
    on_save: Option<SaveHook<'a>>,
}

impl<'a, R> MultiSelectionCallbacks<'a, R> {
    pub fn new(on_success: impl FnOnce(Vec<String>) -> R + Send + 'a) -> Self {
        Self {
            on_success: Box::new(on_success),
            on_back: None,
            on_save: None,
        }
    }

    pub fn with_back(mut self, on_back: impl FnOnce(Vec<String>) -> R + Send + 'a) -> Self {
        self.on_back = Some(Box::new(on_back));
        self
    }

    pub fn with_save(mut self, on_save: impl FnOnce(&[String]) + Send + 'a) -> Self {
        self.on_save = Some(Box::new(on_save));
        self
    }

    pub fn back_enabled(&self) -> bool {
        self.on_back.is_some()
    }
}

/// Per-call options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectionOptions {
    /// Seed for the first turn. Ignored once the selection is active.
    pub preselected: Vec<String>,
    /// Delete the prompt message on Confirm or Back.
    pub delete_on_success: bool,
}

impl Default for MultiSelectionOptions {
    fn default() -> Self {
        Self {
            preselected: Vec::new(),
            delete_on_success: true,
        }
    }
}

impl MultiSelectionOptions {
    pub fn from_defaults(defaults: &SelectionDefaults) -> Self {
        Self {
            preselected: Vec::new(),
            delete_on_success: defaults.delete_prompt_on_success,
        }
    }

    pub fn with_preselected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preselected = values.into_iter().map(Into::into).collect();
        self
    }
}

/// Command for one multi-value turn.
#[derive(Debug, Clone)]
pub struct SelectManyCommand {
    pub conversation_id: ConversationId,
    pub key: SelectionKey,
    pub candidates: CandidateModel,
    pub prompt_text: String,
    /// Text of the incoming message or button press.
    pub input: String,
    pub options: MultiSelectionOptions,
}

/// Handler for multi-value selections.
pub struct SelectManyHandler {
    notes: Arc<dyn ConversationNotes>,
    messenger: Arc<dyn PromptMessenger>,
    localizer: Arc<dyn Localizer>,
}

impl SelectManyHandler {
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
        cmd: SelectManyCommand,
        callbacks: MultiSelectionCallbacks<'_, R>,
    ) -> Result<SelectionOutcome<R>, SelectionError> {
        let captions = command_captions(self.localizer.as_ref());
        let back_enabled = callbacks.back_enabled();

        // 1. Reject models a command caption would shadow
        cmd.candidates.ensure_no_collision(&captions, back_enabled)?;

        // 2. Load in-flight values; none means this is the first turn
        let note = cmd.key.values_note();
        let stored = self.notes.get_note(&cmd.conversation_id, &note).await?;
        let Some(raw) = stored else {
            return self.start(&cmd, &captions, back_enabled).await;
        };

        let mut values = decode_record(&cmd.key, raw)?.values;
        let stale = values.retain_candidates(&cmd.candidates);
        if !stale.is_empty() {
            warn!(
                conversation = %cmd.conversation_id,
                key = %cmd.key,
                dropped = ?stale,
                "stored values are no longer candidates"
            );
        }

        // 3. Apply the input
        let mut selection = MultiSelection::resume(values);
        let decision =
            selection.apply(&cmd.input, &cmd.candidates, &captions, back_enabled)?;

        match decision {
            TurnDecision::Rerender { rejection, changed } => {
                if changed || !stale.is_empty() {
                    self.persist(&cmd, selection.values()).await?;
                }
                if let Some(rejection) = rejection {
                    warn!(
                        conversation = %cmd.conversation_id,
                        key = %cmd.key,
                        input = %cmd.input,
                        code = %rejection.code(),
                        "selection input rejected"
                    );
                } else {
                    debug!(
                        conversation = %cmd.conversation_id,
                        key = %cmd.key,
                        values = ?selection.values().as_slice(),
                        "selection updated"
                    );
                }

                let errors = multi_rejection_errors(self.localizer.as_ref(), rejection);
                self.show(&cmd, &captions, back_enabled, selection.values(), errors)
                    .await?;
                Ok(SelectionOutcome::Pending { rejection })
            }
            TurnDecision::Confirm => {
                let values = selection.into_values().into_vec();
                self.finish(&cmd).await?;
                info!(
                    conversation = %cmd.conversation_id,
                    key = %cmd.key,
                    values = ?values,
                    "selection confirmed"
                );

                let MultiSelectionCallbacks {
                    on_success,
                    on_save,
                    ..
                } = callbacks;
                if let Some(on_save) = on_save {
                    on_save(&values);
                }
                Ok(SelectionOutcome::Completed(on_success(values)))
            }
            TurnDecision::Back => {
                let MultiSelectionCallbacks {
                    on_back, on_save, ..
                } = callbacks;
                let on_back = on_back.ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::InvalidStateTransition,
                        "Back accepted without a back continuation",
                    )
                })?;

                let values = selection.into_values().into_vec();
                self.finish(&cmd).await?;
                info!(
                    conversation = %cmd.conversation_id,
                    key = %cmd.key,
                    values = ?values,
                    "selection backed out"
                );

                if let Some(on_save) = on_save {
                    on_save(&values);
                }
                Ok(SelectionOutcome::Completed(on_back(values)))
            }
        }
    }

    /// First turn: seed, persist, show.
    async fn start<R>(
        &self,
        cmd: &SelectManyCommand,
        captions: &CommandCaptions,
        back_enabled: bool,
    ) -> Result<SelectionOutcome<R>, SelectionError> {
        let (selection, dropped) =
            MultiSelection::start(cmd.options.preselected.iter().cloned(), &cmd.candidates)?;
        if !dropped.is_empty() {
            warn!(
                conversation = %cmd.conversation_id,
                key = %cmd.key,
                dropped = ?dropped,
                "preselected values are not candidates"
            );
        }

        self.persist(cmd, selection.values()).await?;
        self.show(cmd, captions, back_enabled, selection.values(), FieldErrors::new())
            .await?;

        debug!(
            conversation = %cmd.conversation_id,
            key = %cmd.key,
            preselected = selection.values().len(),
            "selection started"
        );
        Ok(SelectionOutcome::pending())
    }

    async fn persist(
        &self,
        cmd: &SelectManyCommand,
        values: &SelectedValues,
    ) -> Result<(), SelectionError> {
        let record = SelectionRecord::new(values.clone());
        let raw = encode_record(&cmd.key, &record)?;
        self.notes
            .set_note(&cmd.conversation_id, &cmd.key.values_note(), raw)
            .await?;
        Ok(())
    }

    async fn show(
        &self,
        cmd: &SelectManyCommand,
        captions: &CommandCaptions,
        back_enabled: bool,
        values: &SelectedValues,
        errors: FieldErrors,
    ) -> Result<(), SelectionError> {
        let marker = self.localizer.text(LangKey::SelectedValuePrefix);
        let keyboard = render_selection(MultiSelectionView {
            model: &cmd.candidates,
            values,
            selected_marker: &marker,
            captions,
            back_enabled,
        });
        let prompt = Prompt {
            text: cmd.prompt_text.clone(),
            errors,
            keyboard,
        };
        self.messenger
            .show_prompt(&cmd.conversation_id, &cmd.key, &prompt)
            .await?;
        Ok(())
    }

    /// Cleanup shared by Confirm and Back.
    async fn finish(&self, cmd: &SelectManyCommand) -> Result<(), SelectionError> {
        let pending = self
            .messenger
            .pending_prompt(&cmd.conversation_id, &cmd.key)
            .await?;

        if cmd.options.delete_on_success {
            if let Some(pending) = &pending {
                self.messenger
                    .delete_message(&cmd.conversation_id, &pending.message_id)
                    .await?;
            }
        }

        self.messenger
            .forget_pending_prompt(&cmd.conversation_id, &cmd.key)
            .await?;
        self.notes
            .delete_note(&cmd.conversation_id, &cmd.key.values_note())
            .await?;
        Ok(())
    }
}
