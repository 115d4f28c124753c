//! Conversation - Ordered turns shown to the user
//!
//! The log is append-only from the caller's point of view: turns are never
//! removed, a pending assistant turn is replaced in place once its dispatch
//! resolves.

use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_TEXT: &str = "⏳ Generating...";
pub const ERROR_PREFIX: &str = "❌ ";

/// Author of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// Lifecycle of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnStatus {
    #[default]
    Complete,
    Pending,
    Failed,
}

/// A single entry of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
    #[serde(default)]
    pub status: TurnStatus,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            status: TurnStatus::Complete,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            status: TurnStatus::Complete,
        }
    }

    /// Optimistic assistant turn shown while a dispatch is in flight
    pub fn placeholder() -> Self {
        Self {
            role: TurnRole::Assistant,
            content: PLACEHOLDER_TEXT.to_string(),
            status: TurnStatus::Pending,
        }
    }

    /// Error-tagged assistant turn
    pub fn failed(message: impl std::fmt::Display) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: format!("{ERROR_PREFIX}{message}"),
            status: TurnStatus::Failed,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == TurnStatus::Pending
    }
}

/// Ordered turns; insertion order is display order
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn and return its index
    pub fn append(&mut self, turn: ConversationTurn) -> usize {
        self.turns.push(turn);
        self.turns.len() - 1
    }

    /// Replace the most recent turn. Returns `false` on an empty log.
    pub fn replace_last(&mut self, turn: ConversationTurn) -> bool {
        match self.turns.last_mut() {
            Some(last) => {
                *last = turn;
                true
            }
            None => false,
        }
    }

    /// Replace the turn at `index`. Returns `false` when out of range.
    pub fn replace_at(&mut self, index: usize, turn: ConversationTurn) -> bool {
        match self.turns.get_mut(index) {
            Some(slot) => {
                *slot = turn;
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.turns.iter().filter(|t| t.is_pending()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_replaced_in_place() {
        let mut log = ConversationLog::new();
        let user = ConversationTurn::user("Write a haiku");
        let reply = ConversationTurn::assistant("Autumn moonlight");

        log.append(user.clone());
        log.append(ConversationTurn::placeholder());
        assert!(log.replace_last(reply.clone()));

        assert_eq!(log.all(), &[user, reply]);
        assert_eq!(log.pending_count(), 0);
    }

    #[test]
    fn test_replace_on_empty_log() {
        let mut log = ConversationLog::new();
        assert!(!log.replace_last(ConversationTurn::assistant("x")));
        assert!(!log.replace_at(3, ConversationTurn::assistant("x")));
        assert!(log.is_empty());
    }

    #[test]
    fn test_failed_turn_is_tagged() {
        let turn = ConversationTurn::failed("boom");
        assert_eq!(turn.content, "❌ boom");
        assert_eq!(turn.status, TurnStatus::Failed);
        assert_eq!(turn.role, TurnRole::Assistant);
    }
}
