//! Orchestrator transport abstraction.

use async_trait::async_trait;

use crate::error::TransportError;

/// A channel to the orchestrator that carries one JSON request and yields one
/// JSON response.
#[async_trait]
pub trait OrchestratorTransport: Send + Sync {
    /// Posts `body` to the orchestrator and returns the decoded response body.
    ///
    /// Non-success statuses and non-JSON bodies are reported as errors; the
    /// shape of a successful body is not inspected.
    async fn post(&self, body: &serde_json::Value) -> Result<serde_json::Value, TransportError>;
}
