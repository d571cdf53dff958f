//! Interactive read loop.
//!
//! Messages are dispatched without blocking the loop, so the user can switch
//! agents while a reply is pending. A message typed while a turn is in flight
//! reaches the dispatcher, which ignores it.

use std::future::Future;
use std::pin::Pin;

use gamemaster_session::application::dispatcher::{SendOutcome, TurnDispatcher};
use gamemaster_session::domain::agent::AgentVariant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::command::{self, Command, HELP};
use crate::error::AppError;

type InFlight<'a> = Pin<Box<dyn Future<Output = SendOutcome> + Send + 'a>>;

/// Reads commands from `input` until `/quit` or end of input, writing command
/// feedback to `out`. Transcript output is the renderer's job.
///
/// At end of input the loop waits for a pending reply; `/quit` abandons it.
///
/// # Errors
///
/// Returns `AppError::Io` if reading input or writing feedback fails.
pub async fn run<R, W>(
    dispatcher: &TurnDispatcher,
    input: R,
    mut out: W,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut in_flight: Option<InFlight<'_>> = None;

    loop {
        tokio::select! {
            biased;

            outcome = poll_in_flight(&mut in_flight), if in_flight.is_some() => {
                debug!(?outcome, "turn finished");
                in_flight = None;
            }

            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match command::parse(&line) {
                    Ok(Command::Say(text)) => {
                        if in_flight.is_some() {
                            let outcome = dispatcher.send(&text).await;
                            debug!(?outcome, "message typed while a reply is pending");
                        } else {
                            in_flight = Some(Box::pin(async move { dispatcher.send(&text).await }));
                        }
                    }
                    Ok(Command::SwitchAgent(agent)) => dispatcher.set_variant(agent),
                    Ok(Command::ListAgents) => {
                        let active = dispatcher.snapshot().agent;
                        write_line(&mut out, &agent_list(active)).await?;
                    }
                    Ok(Command::Help) => write_line(&mut out, HELP).await?,
                    Ok(Command::Quit) => return Ok(()),
                    Err(error) => write_line(&mut out, &error.to_string()).await?,
                }
            }
        }
    }

    if let Some(pending) = in_flight {
        let outcome = pending.await;
        debug!(?outcome, "turn finished after end of input");
    }
    Ok(())
}

async fn poll_in_flight(in_flight: &mut Option<InFlight<'_>>) -> SendOutcome {
    match in_flight {
        Some(turn) => turn.await,
        None => std::future::pending().await,
    }
}

/// Lists the agents, marking `active`.
#[must_use]
pub fn agent_list(active: AgentVariant) -> String {
    AgentVariant::ALL
        .iter()
        .map(|&agent| {
            let marker = if agent == active { '*' } else { ' ' };
            format!("{marker} {:<13} {}", agent.wire_name(), agent.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

async fn write_line<W>(out: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
