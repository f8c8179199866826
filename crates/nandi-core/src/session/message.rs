//! Conversation turn types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// Message typed (or spoken) by the farmer.
    User,
    /// Canned reply from the assistant.
    Assistant,
}

/// A single turn in a transcript.
///
/// Fields are private so a turn cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
    id: String,
    role: TurnRole,
    text: String,
    created_at: DateTime<Utc>,
    language: Language,
}

impl ConversationTurn {
    /// Creates a turn with a fresh id, stamped now.
    pub fn new(role: TurnRole, text: impl Into<String>, language: Language) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            created_at: Utc::now(),
            language,
        }
    }

    pub fn user(text: impl Into<String>, language: Language) -> Self {
        Self::new(TurnRole::User, text, language)
    }

    pub fn assistant(text: impl Into<String>, language: Language) -> Self {
        Self::new(TurnRole::Assistant, text, language)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> TurnRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_get_unique_ids() {
        let a = ConversationTurn::user("hi", Language::English);
        let b = ConversationTurn::user("hi", Language::English);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.role(), TurnRole::User);
        assert_eq!(a.text(), "hi");
    }

    #[test]
    fn test_serialized_shape() {
        let turn = ConversationTurn::assistant("Namaste", Language::Hindi);
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["language"], "hindi");
        assert!(json["createdAt"].is_string());
    }
}
