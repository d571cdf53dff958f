//! Application services: turn dispatch and read-only snapshots.

pub mod dispatcher;
pub mod snapshot;
