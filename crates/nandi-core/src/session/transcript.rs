use serde::{Deserialize, Serialize};

use super::message::{ConversationTurn, TurnRole};

/// Ordered, append-only sequence of turns.
///
/// Turns cannot be removed or edited once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn and returns a reference to it.
    pub fn push(&mut self, turn: ConversationTurn) -> &ConversationTurn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversationTurn> {
        self.turns.iter()
    }

    /// Number of turns authored by `role`.
    pub fn count_by(&self, role: TurnRole) -> usize {
        self.turns.iter().filter(|t| t.role() == role).count()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a ConversationTurn;
    type IntoIter = std::slice::Iter<'a, ConversationTurn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(ConversationTurn::user("one", Language::English));
        let pushed = transcript
            .push(ConversationTurn::assistant("two", Language::English))
            .clone();

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.last(), Some(&pushed));
        let texts: Vec<&str> = transcript.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert_eq!(transcript.count_by(TurnRole::User), 1);
    }
}
