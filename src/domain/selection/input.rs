//! Classification of incoming turn text.

use super::{CandidateModel, CommandCaptions, SelectionCommand};

/// What an incoming text means for a multi-value selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionInput {
    Command(SelectionCommand),
    Candidate(String),
    Unknown(String),
}

impl SelectionInput {
    /// Classifies `text`. Command captions are matched before candidate
    /// values.
    pub fn classify(
        text: &str,
        model: &CandidateModel,
        captions: &CommandCaptions,
        back_enabled: bool,
    ) -> Self {
        if let Some(command) = captions.parse(text, back_enabled) {
            return SelectionInput::Command(command);
        }
        if model.contains(text) {
            return SelectionInput::Candidate(text.to_string());
        }
        SelectionInput::Unknown(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> CandidateModel {
        CandidateModel::builder()
            .row([("Red", "r"), ("Blue", "b")])
            .build()
            .unwrap()
    }

    fn captions() -> CommandCaptions {
        CommandCaptions::new("OK", "Clear", "All", "Back")
    }

    #[test]
    fn classifies_candidates_and_commands() {
        assert_eq!(
            SelectionInput::classify("r", &model(), &captions(), false),
            SelectionInput::Candidate("r".to_string())
        );
        assert_eq!(
            SelectionInput::classify("All", &model(), &captions(), false),
            SelectionInput::Command(SelectionCommand::SelectAll)
        );
    }

    #[test]
    fn labels_are_not_values() {
        assert_eq!(
            SelectionInput::classify("Red", &model(), &captions(), false),
            SelectionInput::Unknown("Red".to_string())
        );
    }

    #[test]
    fn back_without_continuation_is_unknown() {
        assert_eq!(
            SelectionInput::classify("Back", &model(), &captions(), false),
            SelectionInput::Unknown("Back".to_string())
        );
    }
}
