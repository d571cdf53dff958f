//! Parsing of terminal input lines.

use gamemaster_session::domain::agent::{AgentVariant, ParseAgentVariantError};
use thiserror::Error;

/// Help text listing the available commands.
pub const HELP: &str = "\
Commandes :
  /agent <nom>   choisir l'agent (storyteller, rules-keeper, thrower)
  /agents        lister les agents
  /help          afficher cette aide
  /quit          quitter
Toute autre ligne est envoyée à l'agent actif.";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send the line, verbatim, to the active agent.
    Say(String),
    /// Select another agent.
    SwitchAgent(AgentVariant),
    /// List the agents and mark the active one.
    ListAgents,
    /// Show the help text.
    Help,
    /// Leave the client.
    Quit,
}

/// A line that looked like a command but could not be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// `/agent` without a name.
    #[error("usage : /agent <storyteller|rules-keeper|thrower>")]
    MissingAgent,

    /// `/agent` with an unknown name.
    #[error(transparent)]
    UnknownAgent(#[from] ParseAgentVariantError),

    /// Any other slash command.
    #[error("commande inconnue : /{0} (tapez /help)")]
    Unknown(String),
}

/// Parses one input line. Lines not starting with `/` are messages and are
/// kept exactly as typed.
///
/// # Errors
///
/// Returns `CommandError` for malformed or unknown slash commands.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let Some(rest) = line.trim_start().strip_prefix('/') else {
        return Ok(Command::Say(line.to_owned()));
    };

    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    match name {
        "agent" => {
            let agent = words.next().ok_or(CommandError::MissingAgent)?;
            Ok(Command::SwitchAgent(agent.parse()?))
        }
        "agents" => Ok(Command::ListAgents),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_owned())),
    }
}
