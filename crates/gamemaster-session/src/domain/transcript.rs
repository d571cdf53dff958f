//! Transcript turns and the append-only store that holds them.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person at the keyboard.
    User,
    /// The orchestrator, on behalf of the selected agent.
    Agent,
}

/// Identifier of a turn, unique and increasing within one transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TurnId(pub u64);

/// One fully resolved message in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// Turn identifier.
    pub id: TurnId,
    /// Author of the turn.
    pub sender: Sender,
    /// Display text.
    pub text: String,
    /// When the turn was appended.
    pub sent_at: DateTime<Utc>,
}

/// Ordered, append-only sequence of turns.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn and returns its identifier.
    pub(crate) fn append(
        &mut self,
        sender: Sender,
        text: String,
        sent_at: DateTime<Utc>,
    ) -> TurnId {
        let id = TurnId(self.turns.len() as u64 + 1);
        self.turns.push(Turn {
            id,
            sender,
            text,
            sent_at,
        });
        id
    }

    /// Returns all turns in append order.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the number of turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns `true` if no turn has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
