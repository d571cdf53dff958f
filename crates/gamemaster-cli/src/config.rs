//! Client configuration read from the environment.

use std::time::Duration;

use gamemaster_session::domain::agent::AgentVariant;
use gamemaster_session::domain::aggregates::DEFAULT_SESSION_ID;

use crate::error::AppError;

/// Orchestrator endpoint. Required.
pub const ORCHESTRATOR_URL_VAR: &str = "ORCHESTRATOR_URL";
/// Session identifier sent with every request.
pub const SESSION_ID_VAR: &str = "GAMEMASTER_SESSION_ID";
/// Agent selected at startup.
pub const AGENT_VAR: &str = "GAMEMASTER_AGENT";
/// Request timeout in whole seconds. Unset means no timeout.
pub const TIMEOUT_VAR: &str = "ORCHESTRATOR_TIMEOUT_SECS";

/// Settings for one client run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Orchestrator endpoint, used as-is.
    pub orchestrator_url: String,
    /// Opaque session identifier.
    pub session_id: String,
    /// Agent selected at startup.
    pub agent: AgentVariant,
    /// Optional per-request timeout.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is missing or malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `ORCHESTRATOR_URL` is missing, the agent
    /// is unknown, or the timeout is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let orchestrator_url = get(ORCHESTRATOR_URL_VAR).ok_or_else(|| {
            AppError::Config(format!("{ORCHESTRATOR_URL_VAR} environment variable must be set"))
        })?;

        let session_id = get(SESSION_ID_VAR).unwrap_or_else(|| DEFAULT_SESSION_ID.to_owned());

        let agent = match get(AGENT_VAR) {
            Some(name) => name
                .parse()
                .map_err(|e| AppError::Config(format!("{AGENT_VAR}: {e}")))?,
            None => AgentVariant::default(),
        };

        let request_timeout = match get(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|e| {
                    AppError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds: {e}"))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(format!(
                        "{TIMEOUT_VAR} must be greater than zero"
                    )));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            orchestrator_url,
            session_id,
            agent,
            request_timeout,
        })
    }
}
