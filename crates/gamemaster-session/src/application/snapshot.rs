//! Read-only session views handed to renderers.

use serde::Serialize;

use crate::domain::agent::AgentVariant;
use crate::domain::aggregates::Session;
use crate::domain::transcript::Turn;

/// Point-in-time copy of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// The session identifier.
    pub session_id: String,
    /// The agent the next turn will address.
    pub agent: AgentVariant,
    /// All turns so far, in order.
    pub transcript: Vec<Turn>,
    /// Whether a turn is awaiting its response.
    pub pending: bool,
}

impl SessionSnapshot {
    /// Captures the current state of `session`.
    #[must_use]
    pub fn of(session: &Session) -> Self {
        Self {
            session_id: session.session_id().to_owned(),
            agent: session.agent(),
            transcript: session.transcript().turns().to_vec(),
            pending: session.is_pending(),
        }
    }
}
