//! Command vocabulary - the fixed control buttons of a multi-value selection.

use serde::{Deserialize, Serialize};

/// Control actions recognised alongside candidate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionCommand {
    Confirm,
    Clear,
    SelectAll,
    Back,
}

/// Localized captions of the control buttons.
///
/// The caption is both what the button shows and the text the transport
/// hands back when it is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCaptions {
    confirm: String,
    clear: String,
    select_all: String,
    back: String,
}

impl CommandCaptions {
    pub fn new(
        confirm: impl Into<String>,
        clear: impl Into<String>,
        select_all: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        Self {
            confirm: confirm.into(),
            clear: clear.into(),
            select_all: select_all.into(),
            back: back.into(),
        }
    }

    /// Caption for a command.
    pub fn caption(&self, command: SelectionCommand) -> &str {
        match command {
            SelectionCommand::Confirm => &self.confirm,
            SelectionCommand::Clear => &self.clear,
            SelectionCommand::SelectAll => &self.select_all,
            SelectionCommand::Back => &self.back,
        }
    }

    /// Commands that are legal input for a selection.
    ///
    /// Back only exists when the caller supplied a back continuation.
    pub fn active_commands(&self, back_enabled: bool) -> Vec<SelectionCommand> {
        let mut commands = vec![
            SelectionCommand::Confirm,
            SelectionCommand::Clear,
            SelectionCommand::SelectAll,
        ];
        if back_enabled {
            commands.push(SelectionCommand::Back);
        }
        commands
    }

    /// Maps input text to a command, exact match only.
    pub fn parse(&self, text: &str, back_enabled: bool) -> Option<SelectionCommand> {
        self.active_commands(back_enabled)
            .into_iter()
            .find(|command| self.caption(*command) == text)
    }
}
