//! Game-master CLI — error types.

use gamemaster_core::error::TransportError;
use thiserror::Error;

/// Startup and runtime errors for the terminal client.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The orchestrator transport could not be set up.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Terminal I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = AppError::Config("ORCHESTRATOR_URL must be set".into());
        assert_eq!(
            err.to_string(),
            "configuration error: ORCHESTRATOR_URL must be set"
        );
    }

    #[test]
    fn test_transport_error_converts() {
        let err: AppError = TransportError::Client("no tls backend".into()).into();
        assert!(matches!(err, AppError::Transport(_)));
        assert!(err.to_string().contains("no tls backend"));
    }
}
