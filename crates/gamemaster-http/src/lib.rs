//! HTTP adapter for the orchestrator transport.

pub mod http_transport;
