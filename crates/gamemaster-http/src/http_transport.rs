//! `reqwest` implementation of the `OrchestratorTransport` trait.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use gamemaster_core::error::TransportError;
use gamemaster_core::transport::OrchestratorTransport;

/// Posts JSON to a single orchestrator endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport for `endpoint`.
    ///
    /// With `timeout` set, a request that has not completed in time fails
    /// with `TransportError::Timeout`. Without it, requests wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Client` if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Creates a transport that posts through an already configured client.
    #[must_use]
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_reqwest_error(error: &reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if let Some(status) = error.status() {
        TransportError::Status(status.as_u16())
    } else if error.is_decode() {
        TransportError::Decode(error.to_string())
    } else {
        TransportError::Request(error.to_string())
    }
}

#[async_trait]
impl OrchestratorTransport for HttpTransport {
    #[instrument(skip(self, body), fields(endpoint = %self.endpoint))]
    async fn post(&self, body: &Value) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| map_reqwest_error(&e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "orchestrator responded");

        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| map_reqwest_error(&e))
    }
}
