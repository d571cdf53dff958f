//! Test transports — mock `OrchestratorTransport` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use gamemaster_core::error::TransportError;
use gamemaster_core::transport::OrchestratorTransport;
use serde_json::Value;
use tokio::sync::Notify;

/// A transport that records every request body and answers each one with the
/// configured response.
#[derive(Debug)]
pub struct RecordingTransport {
    response: Value,
    requests: Mutex<Vec<Value>>,
}

impl RecordingTransport {
    /// Create a transport that answers every request with `response`.
    #[must_use]
    pub fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all request bodies received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrchestratorTransport for RecordingTransport {
    async fn post(&self, body: &Value) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(body.clone());
        Ok(self.response.clone())
    }
}

/// A transport that always fails as if the orchestrator were unreachable.
/// Records request bodies so tests can assert a request was attempted.
#[derive(Debug, Default)]
pub struct FailingTransport {
    requests: Mutex<Vec<Value>>,
}

impl FailingTransport {
    /// Create a failing transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all request bodies received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrchestratorTransport for FailingTransport {
    async fn post(&self, body: &Value) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(body.clone());
        Err(TransportError::Request("connection refused".into()))
    }
}

/// A transport that holds each request until the test releases it. Used to
/// observe the session while a turn is in flight.
#[derive(Debug)]
pub struct GatedTransport {
    response: Value,
    requests: Mutex<Vec<Value>>,
    arrived: Notify,
    gate: Notify,
}

impl GatedTransport {
    /// Create a gated transport that answers with `response` once released.
    #[must_use]
    pub fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
            arrived: Notify::new(),
            gate: Notify::new(),
        }
    }

    /// Waits until a request has reached the transport.
    pub async fn wait_for_request(&self) {
        self.arrived.notified().await;
    }

    /// Lets one held request complete.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    /// Returns a snapshot of all request bodies received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrchestratorTransport for GatedTransport {
    async fn post(&self, body: &Value) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(body.clone());
        self.arrived.notify_one();
        self.gate.notified().await;
        Ok(self.response.clone())
    }
}
