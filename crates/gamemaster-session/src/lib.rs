//! Game-master client — session orchestration.
//!
//! Responsible for agent selection, request payload construction,
//! response interpretation, and single-flight turn dispatch over an
//! append-only transcript.

pub mod application;
pub mod domain;
