//! Turn dispatcher: the single owner of session mutation.
//!
//! A turn runs in two phases. The user's text is appended and the session
//! enters `Sending` before any I/O happens, then exactly one request goes to
//! the orchestrator and exactly one agent turn closes the exchange, whether
//! the request succeeded or not.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gamemaster_core::clock::Clock;
use gamemaster_core::transport::OrchestratorTransport;
use tokio::sync::watch;
use tracing::{Span, debug, info, instrument, warn};
use uuid::Uuid;

use crate::application::snapshot::SessionSnapshot;
use crate::domain::agent::AgentVariant;
use crate::domain::aggregates::{Session, SkipReason};
use crate::domain::reply::{FAILURE_MESSAGE, interpret};

/// Result of a call to [`TurnDispatcher::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The input was ignored; nothing changed.
    Skipped(SkipReason),
    /// The orchestrator answered and its reply was appended.
    Answered,
    /// No response could be obtained; the failure message was appended.
    Failed,
}

/// Coordinates turns between the user, the orchestrator and the transcript.
pub struct TurnDispatcher {
    session: Mutex<Session>,
    transport: Arc<dyn OrchestratorTransport>,
    clock: Arc<dyn Clock>,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl TurnDispatcher {
    /// Creates a dispatcher that owns `session`.
    #[must_use]
    pub fn new(
        session: Session,
        transport: Arc<dyn OrchestratorTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (snapshots, _) = watch::channel(SessionSnapshot::of(&session));
        Self {
            session: Mutex::new(session),
            transport,
            clock,
            snapshots,
        }
    }

    /// Returns a copy of the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::of(&self.lock_session())
    }

    /// Subscribes to snapshots published after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    /// Selects the agent for the next turn. Allowed while a turn is in flight;
    /// the in-flight request keeps the agent it was sent with.
    pub fn set_variant(&self, agent: AgentVariant) {
        let mut session = self.lock_session();
        session.select_agent(agent);
        info!(agent = %agent, "agent selected");
        self.publish(&session);
    }

    /// Sends `raw_input` to the selected agent and waits for the reply.
    ///
    /// Blank input, or input arriving while another turn is in flight, is
    /// ignored without touching the session. Transport failures never escape:
    /// they resolve into an agent turn carrying [`FAILURE_MESSAGE`].
    ///
    /// Dropping the returned future before it completes closes the turn the
    /// same way a transport failure would.
    #[instrument(skip(self, raw_input), fields(correlation_id = tracing::field::Empty))]
    pub async fn send(&self, raw_input: &str) -> SendOutcome {
        // Lock only around the synchronous state change, never across the request.
        let payload = {
            let mut session = self.lock_session();
            match session.begin_turn(raw_input, self.clock.now()) {
                Ok(payload) => {
                    self.publish(&session);
                    payload
                }
                Err(reason) => {
                    debug!(?reason, "send skipped");
                    return SendOutcome::Skipped(reason);
                }
            }
        };

        let correlation_id = Uuid::new_v4();
        Span::current().record("correlation_id", tracing::field::display(correlation_id));
        info!(agent = %payload.agent, field = payload.text_field(), "dispatching turn");

        let turn = OpenTurn {
            dispatcher: self,
            open: true,
        };

        match self.transport.post(&payload.to_json()).await {
            Ok(body) => {
                debug!("orchestrator replied");
                turn.close(interpret(&body));
                SendOutcome::Answered
            }
            Err(error) => {
                warn!(%error, "orchestrator request failed");
                turn.close(FAILURE_MESSAGE.to_owned());
                SendOutcome::Failed
            }
        }
    }

    fn finish_turn(&self, text: String) {
        let mut session = self.lock_session();
        session.complete_turn(text, self.clock.now());
        self.publish(&session);
    }

    fn publish(&self, session: &Session) {
        self.snapshots.send_replace(SessionSnapshot::of(session));
    }

    fn lock_session(&self) -> MutexGuard<'_, Session> {
        // The session is only mutated through short synchronous calls that
        // cannot leave it half-updated, so a poisoned lock is still usable.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Guard for a turn whose request is in flight. Closing it appends the agent
/// turn; dropping it unclosed appends the failure message instead.
struct OpenTurn<'a> {
    dispatcher: &'a TurnDispatcher,
    open: bool,
}

impl OpenTurn<'_> {
    fn close(mut self, text: String) {
        self.open = false;
        self.dispatcher.finish_turn(text);
    }
}

impl Drop for OpenTurn<'_> {
    fn drop(&mut self) {
        if self.open {
            warn!("turn abandoned before the orchestrator replied");
            self.dispatcher.finish_turn(FAILURE_MESSAGE.to_owned());
        }
    }
}
