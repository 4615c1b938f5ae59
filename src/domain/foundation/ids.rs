//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of one ongoing conversation (chat) with a user.
///
/// Transports use different id schemes (integers, composite strings), so the
/// value is kept as an opaque, non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    /// Creates a new ConversationId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("conversation_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConversationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Namespace of one selection inside a conversation.
///
/// A caller-chosen token, or the configured default name when the caller
/// runs a single selection per conversation. All notes belonging to the
/// selection are derived from this key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionKey(String);

impl SelectionKey {
    /// Creates a new SelectionKey.
    ///
    /// The key becomes part of note names, so it must be non-empty and
    /// free of whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::empty_field("selection_key"));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "selection_key",
                "must not contain whitespace",
            ));
        }
        Ok(Self(key))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the note holding the values of an in-flight multi-value
    /// selection.
    pub fn values_note(&self) -> String {
        format!("{}_values", self.0)
    }

    /// Name of the note holding a stored single-value result.
    pub fn result_note(&self) -> String {
        format!("{}_result", self.0)
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SelectionKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Transport-level identifier of a sent message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a MessageId from a transport id, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("message_id"));
        }
        Ok(Self(id))
    }

    /// Creates a new random MessageId for transports without their own ids.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_id_rejects_empty() {
        assert!(matches!(
            ConversationId::new(""),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn conversation_id_parses_from_str() {
        let id: ConversationId = "chat-42".parse().unwrap();
        assert_eq!(id.as_str(), "chat-42");
        assert_eq!(id.to_string(), "chat-42");
    }

    #[test]
    fn selection_key_rejects_whitespace() {
        assert!(matches!(
            SelectionKey::new("pick colours"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn selection_key_derives_distinct_note_names() {
        let key = SelectionKey::new("colours").unwrap();
        assert_eq!(key.values_note(), "colours_values");
        assert_eq!(key.result_note(), "colours_result");
        assert_ne!(key.values_note(), key.result_note());
    }

    #[test]
    fn generated_message_ids_are_unique() {
        assert_ne!(MessageId::generate(), MessageId::generate());
    }

    #[test]
    fn message_id_serializes_transparently() {
        let id = MessageId::new("1001").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1001\"");
    }
}
