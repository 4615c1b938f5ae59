//! Candidate model - the caller-supplied label/value grid.
//!
//! Top-level nodes are keyboard rows. A lone button at the top level forms a
//! row of its own; a group forms one row holding every button beneath it,
//! nested groups (categories) included, in declaration order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::CommandCaptions;

/// Errors raised when a candidate model breaks the caller contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateModelError {
    #[error("Candidate model has no buttons")]
    Empty,

    #[error("Candidate '{label}' has an empty value")]
    EmptyValue { label: String },

    #[error("Candidate value '{value}' appears more than once")]
    DuplicateValue { value: String },

    #[error("Candidate value '{value}' collides with a command caption")]
    CaptionCollision { value: String },
}

/// One selectable option: a display label and the opaque value it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub label: String,
    pub value: String,
}

impl Candidate {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A node of the candidate tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateNode {
    Button(Candidate),
    Group(Vec<CandidateNode>),
}

impl CandidateNode {
    /// Appends every button under this node to `out`, depth first.
    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Candidate>) {
        match self {
            CandidateNode::Button(candidate) => out.push(candidate),
            CandidateNode::Group(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Returns every button under this node, depth first.
    pub fn leaves(&self) -> Vec<&Candidate> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }
}

impl From<Candidate> for CandidateNode {
    fn from(candidate: Candidate) -> Self {
        CandidateNode::Button(candidate)
    }
}

/// Validated, read-only candidate grid.
///
/// Values are unique across the whole tree and never empty. Labels are
/// display-only and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateModel {
    rows: Vec<CandidateNode>,
}

impl CandidateModel {
    /// Builds a model from its rows, checking the uniqueness contract.
    pub fn new(rows: Vec<CandidateNode>) -> Result<Self, CandidateModelError> {
        let model = Self { rows };
        let leaves = model.candidates();
        if leaves.is_empty() {
            return Err(CandidateModelError::Empty);
        }

        let mut seen = HashSet::with_capacity(leaves.len());
        for candidate in leaves {
            if candidate.value.is_empty() {
                return Err(CandidateModelError::EmptyValue {
                    label: candidate.label.clone(),
                });
            }
            if !seen.insert(candidate.value.as_str()) {
                return Err(CandidateModelError::DuplicateValue {
                    value: candidate.value.clone(),
                });
            }
        }

        Ok(model)
    }

    /// Starts a row-by-row builder.
    pub fn builder() -> CandidateModelBuilder {
        CandidateModelBuilder::default()
    }

    /// Keyboard rows in declaration order.
    pub fn rows(&self) -> &[CandidateNode] {
        &self.rows
    }

    /// Every candidate in flattened declaration order.
    pub fn candidates(&self) -> Vec<&Candidate> {
        let mut out = Vec::new();
        for row in &self.rows {
            row.collect_leaves(&mut out);
        }
        out
    }

    /// Every candidate value in flattened declaration order.
    pub fn values(&self) -> Vec<&str> {
        self.candidates()
            .into_iter()
            .map(|c| c.value.as_str())
            .collect()
    }

    /// Exact, case-sensitive membership test on values.
    pub fn contains(&self, value: &str) -> bool {
        self.candidates().iter().any(|c| c.value == value)
    }

    /// Rejects models where a value would be shadowed by a command caption.
    ///
    /// `back_enabled` decides whether the Back caption is part of the
    /// vocabulary for this selection.
    pub fn ensure_no_collision(
        &self,
        captions: &CommandCaptions,
        back_enabled: bool,
    ) -> Result<(), CandidateModelError> {
        for candidate in self.candidates() {
            if captions.parse(&candidate.value, back_enabled).is_some() {
                return Err(CandidateModelError::CaptionCollision {
                    value: candidate.value.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for CandidateModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<CandidateNode>::deserialize(deserializer)?;
        CandidateModel::new(rows).map_err(serde::de::Error::custom)
    }
}

/// Builder for [`CandidateModel`].
#[derive(Debug, Default)]
pub struct CandidateModelBuilder {
    rows: Vec<CandidateNode>,
}

impl CandidateModelBuilder {
    /// Adds a row of `(label, value)` buttons.
    pub fn row<L, V>(mut self, buttons: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        let nodes = buttons
            .into_iter()
            .map(|(label, value)| CandidateNode::Button(Candidate::new(label, value)))
            .collect();
        self.rows.push(CandidateNode::Group(nodes));
        self
    }

    /// Adds a single-button row.
    pub fn button(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows
            .push(CandidateNode::Button(Candidate::new(label, value)));
        self
    }

    /// Adds an arbitrary node (for nested categories).
    pub fn node(mut self, node: CandidateNode) -> Self {
        self.rows.push(node);
        self
    }

    pub fn build(self) -> Result<CandidateModel, CandidateModelError> {
        CandidateModel::new(self.rows)
    }
}
