//! Domain model for a game-master session.

pub mod agent;
pub mod aggregates;
pub mod reply;
pub mod request;
pub mod transcript;
