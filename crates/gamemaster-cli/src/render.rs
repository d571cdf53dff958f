//! Terminal rendering of session snapshots.
//!
//! The renderer only reads snapshots. It remembers how much it has already
//! printed so each snapshot produces just the new lines.

use gamemaster_session::application::snapshot::SessionSnapshot;
use gamemaster_session::domain::agent::AgentVariant;
use gamemaster_session::domain::transcript::{Sender, Turn};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;

/// Shown while a turn awaits the orchestrator's reply.
pub const THINKING: &str = "Le Maître du Jeu réfléchit...";

/// Incremental transcript printer.
#[derive(Debug, Default)]
pub struct TranscriptRenderer {
    rendered_turns: usize,
    agent: Option<AgentVariant>,
    thinking_shown: bool,
}

impl TranscriptRenderer {
    /// Creates a renderer that has printed nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines to print for `snapshot` since the previous call.
    pub fn render(&mut self, snapshot: &SessionSnapshot) -> Vec<String> {
        let mut lines = Vec::new();

        if self.agent != Some(snapshot.agent) {
            lines.push(agent_banner(snapshot.agent));
            self.agent = Some(snapshot.agent);
        }

        let new_turns = snapshot.transcript.get(self.rendered_turns..).unwrap_or_default();
        lines.extend(new_turns.iter().map(format_turn));
        self.rendered_turns = snapshot.transcript.len();

        if snapshot.pending && !self.thinking_shown {
            lines.push(THINKING.to_owned());
        }
        self.thinking_shown = snapshot.pending;

        lines
    }
}

/// Formats one transcript turn.
#[must_use]
pub fn format_turn(turn: &Turn) -> String {
    match turn.sender {
        Sender::User => format!("Vous : {}", turn.text),
        Sender::Agent => format!("Maître du Jeu : {}", turn.text),
    }
}

fn agent_banner(agent: AgentVariant) -> String {
    format!("[Agent : {}]", agent.label())
}

/// Prints every published snapshot to `out` until the dispatcher goes away.
///
/// # Errors
///
/// Returns the first write error.
pub async fn follow<W>(
    mut snapshots: watch::Receiver<SessionSnapshot>,
    mut out: W,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut renderer = TranscriptRenderer::new();
    loop {
        let lines = renderer.render(&snapshots.borrow_and_update());
        for line in lines {
            out.write_all(line.as_bytes()).await?;
            out.write_all(b"\n").await?;
        }
        out.flush().await?;

        if snapshots.changed().await.is_err() {
            return Ok(());
        }
    }
}
