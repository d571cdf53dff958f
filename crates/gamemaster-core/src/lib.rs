//! Game-master core — shared abstractions.
//!
//! This crate defines the traits and types the session logic and its
//! infrastructure adapters agree on. It contains no HTTP code.

pub mod clock;
pub mod error;
pub mod transport;
