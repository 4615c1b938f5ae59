//! Selection state - the ordered set of currently selected values.

use serde::{Deserialize, Serialize};

use super::CandidateModel;
use crate::domain::foundation::Timestamp;

/// Ordered, duplicate-free sequence of selected candidate values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedValues(Vec<String>);

impl SelectedValues {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Seeds values from a caller-supplied preselection.
    ///
    /// Keeps the first occurrence of each value and drops values that are
    /// not candidates. Returns the dropped values alongside.
    pub fn seeded<I, S>(preselected: I, model: &CandidateModel) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = Self::new();
        let mut dropped = Vec::new();
        for value in preselected {
            let value = value.into();
            if !model.contains(&value) {
                dropped.push(value);
            } else if !values.contains(&value) {
                values.0.push(value);
            }
        }
        (values, dropped)
    }

    /// Flips membership of `value`. Returns true when it is now selected.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|v| v == value) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(value.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Replaces the selection with every candidate, in model order.
    pub fn select_all(&mut self, model: &CandidateModel) {
        self.0 = model.values().into_iter().map(str::to_string).collect();
    }

    /// Drops values that are no longer candidates. Returns what was dropped.
    pub fn retain_candidates(&mut self, model: &CandidateModel) -> Vec<String> {
        let (kept, dropped): (Vec<String>, Vec<String>) =
            self.0.drain(..).partition(|v| model.contains(v));
        self.0 = kept;
        dropped
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Persisted form of an in-flight multi-value selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub values: SelectedValues,
    pub updated_at: Timestamp,
}

impl SelectionRecord {
    pub fn new(values: SelectedValues) -> Self {
        Self {
            values,
            updated_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> CandidateModel {
        CandidateModel::builder()
            .row([("Red", "r"), ("Blue", "b"), ("Green", "g")])
            .build()
            .unwrap()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut values = SelectedValues::new();
        assert!(values.toggle("r"));
        assert_eq!(values.as_slice(), ["r"]);
        assert!(!values.toggle("r"));
        assert!(values.is_empty());
    }

    #[test]
    fn toggle_appends_in_press_order() {
        let mut values = SelectedValues::new();
        values.toggle("g");
        values.toggle("r");
        assert_eq!(values.as_slice(), ["g", "r"]);
    }

    #[test]
    fn seeded_deduplicates_and_preserves_order() {
        let (values, dropped) = SelectedValues::seeded(["b", "r", "b"], &model());
        assert_eq!(values.as_slice(), ["b", "r"]);
        assert!(dropped.is_empty());
    }

    #[test]
    fn seeded_drops_unknown_values() {
        let (values, dropped) = SelectedValues::seeded(["purple", "g"], &model());
        assert_eq!(values.as_slice(), ["g"]);
        assert_eq!(dropped, vec!["purple".to_string()]);
    }

    #[test]
    fn select_all_uses_model_order() {
        let mut values = SelectedValues::new();
        values.toggle("g");
        values.select_all(&model());
        assert_eq!(values.as_slice(), ["r", "b", "g"]);
    }

    #[test]
    fn retain_candidates_removes_stale_values() {
        let mut values: SelectedValues = serde_json::from_str(r#"["r","gone"]"#).unwrap();
        let dropped = values.retain_candidates(&model());
        assert_eq!(values.as_slice(), ["r"]);
        assert_eq!(dropped, vec!["gone".to_string()]);
    }

    #[test]
    fn record_serializes_values_as_plain_list() {
        let mut values = SelectedValues::new();
        values.toggle("b");
        let json = serde_json::to_value(SelectionRecord::new(values)).unwrap();
        assert_eq!(json["values"], serde_json::json!(["b"]));
        assert!(json["updated_at"].is_string());
    }
}
