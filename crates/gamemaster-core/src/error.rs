//! Transport error types.

use thiserror::Error;

/// Failure to obtain a JSON response from the orchestrator.
///
/// Every variant is recovered by the dispatcher the same way: the turn
/// resolves into the fixed failure message.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The orchestrator answered with a non-success status code.
    #[error("orchestrator returned status {0}")]
    Status(u16),

    /// The response body was not valid JSON.
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("client error: {0}")]
    Client(String),
}
