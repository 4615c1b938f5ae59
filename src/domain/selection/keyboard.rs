//! Grid renderer - builds the inline keyboard for a selection prompt.
//!
//! Rendering is a pure function of the candidate model, the current values
//! and the localized captions. Row grouping of the model is preserved;
//! control rows are appended after all candidate rows.

use serde::{Deserialize, Serialize};

use super::{CandidateModel, CommandCaptions, SelectedValues, SelectionCommand};

/// One button: the text shown and the value sent back when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    pub value: String,
}

impl KeyboardButton {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Renderable keyboard, row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    rows: Vec<Vec<KeyboardButton>>,
}

impl Keyboard {
    pub fn rows(&self) -> &[Vec<KeyboardButton>] {
        &self.rows
    }

    /// Every button text, row-major.
    pub fn texts(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flatten()
            .map(|button| button.text.as_str())
            .collect()
    }

    fn push_row(&mut self, row: Vec<KeyboardButton>) {
        if !row.is_empty() {
            self.rows.push(row);
        }
    }
}

/// Keyboard for a single-value selection: candidates only, no markers.
pub fn render_choices(model: &CandidateModel) -> Keyboard {
    let mut keyboard = Keyboard::default();
    for row in model.rows() {
        keyboard.push_row(
            row.leaves()
                .into_iter()
                .map(|c| KeyboardButton::new(&c.label, &c.value))
                .collect(),
        );
    }
    keyboard
}

/// Inputs of a multi-value rendering.
#[derive(Debug, Clone, Copy)]
pub struct MultiSelectionView<'a> {
    pub model: &'a CandidateModel,
    pub values: &'a SelectedValues,
    pub selected_marker: &'a str,
    pub captions: &'a CommandCaptions,
    pub back_enabled: bool,
}

/// Keyboard for a multi-value selection.
///
/// Selected candidates get the marker prefixed to their label. Without Back
/// the control row is `Clear | All | OK`; with Back it is split into
/// `Clear | All` and `Back | OK`.
pub fn render_selection(view: MultiSelectionView<'_>) -> Keyboard {
    let mut keyboard = Keyboard::default();
    for row in view.model.rows() {
        keyboard.push_row(
            row.leaves()
                .into_iter()
                .map(|c| {
                    let text = if view.values.contains(&c.value) {
                        format!("{}{}", view.selected_marker, c.label)
                    } else {
                        c.label.clone()
                    };
                    KeyboardButton::new(text, &c.value)
                })
                .collect(),
        );
    }

    let command = |cmd: SelectionCommand| {
        let caption = view.captions.caption(cmd);
        KeyboardButton::new(caption, caption)
    };

    if view.back_enabled {
        keyboard.push_row(vec![
            command(SelectionCommand::Clear),
            command(SelectionCommand::SelectAll),
        ]);
        keyboard.push_row(vec![
            command(SelectionCommand::Back),
            command(SelectionCommand::Confirm),
        ]);
    } else {
        keyboard.push_row(vec![
            command(SelectionCommand::Clear),
            command(SelectionCommand::SelectAll),
            command(SelectionCommand::Confirm),
        ]);
    }

    keyboard
}
