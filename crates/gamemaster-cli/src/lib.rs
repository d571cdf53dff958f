//! Terminal front-end for the game-master orchestrator client.

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod repl;
