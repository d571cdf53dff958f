//! The session aggregate and its single-flight state machine.

use chrono::{DateTime, Utc};

use super::agent::AgentVariant;
use super::request::RequestPayload;
use super::transcript::{Sender, Transcript};

/// Session id used when none is configured.
pub const DEFAULT_SESSION_ID: &str = "partie-42";

/// Dispatch state machine. Only `Idle` accepts a new turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    /// No request in flight.
    #[default]
    Idle,
    /// A request is in flight; new sends are ignored.
    Sending,
}

/// Why a send was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The input was empty or whitespace only.
    EmptyInput,
    /// Another turn is still awaiting its response.
    AlreadyPending,
}

/// The client-held conversation with the orchestrator.
#[derive(Debug)]
pub struct Session {
    /// Opaque server-side conversation identifier.
    pub(crate) session_id: String,
    /// Agent captured by the next turn.
    pub(crate) agent: AgentVariant,
    /// Append-only turn history.
    pub(crate) transcript: Transcript,
    /// Current dispatch state.
    pub(crate) state: DispatchState,
}

impl Session {
    /// Creates an idle session with an empty transcript.
    #[must_use]
    pub fn new(session_id: impl Into<String>, agent: AgentVariant) -> Self {
        Self {
            session_id: session_id.into(),
            agent,
            transcript: Transcript::new(),
            state: DispatchState::Idle,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns the currently selected agent.
    #[must_use]
    pub fn agent(&self) -> AgentVariant {
        self.agent
    }

    /// Returns the transcript.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the dispatch state.
    #[must_use]
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Returns `true` while a turn awaits its response.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == DispatchState::Sending
    }

    /// Selects the agent for subsequent turns. The transcript is untouched.
    pub fn select_agent(&mut self, agent: AgentVariant) {
        self.agent = agent;
    }

    /// Opens a turn: appends the user's text, moves to `Sending`, and returns
    /// the request built from the agent and session id as they are now.
    ///
    /// # Errors
    ///
    /// Returns a `SkipReason` and leaves the session unchanged if the input is
    /// blank or a turn is already open.
    pub(crate) fn begin_turn(
        &mut self,
        raw_input: &str,
        at: DateTime<Utc>,
    ) -> Result<RequestPayload, SkipReason> {
        if raw_input.trim().is_empty() {
            return Err(SkipReason::EmptyInput);
        }
        if self.state == DispatchState::Sending {
            return Err(SkipReason::AlreadyPending);
        }

        self.transcript.append(Sender::User, raw_input.to_owned(), at);
        self.state = DispatchState::Sending;

        Ok(RequestPayload::build(
            self.agent,
            self.session_id.clone(),
            raw_input,
        ))
    }

    /// Closes the open turn with the agent's text and returns to `Idle`.
    pub(crate) fn complete_turn(&mut self, text: String, at: DateTime<Utc>) {
        debug_assert_eq!(self.state, DispatchState::Sending);
        self.transcript.append(Sender::Agent, text, at);
        self.state = DispatchState::Idle;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_ID, AgentVariant::default())
    }
}
