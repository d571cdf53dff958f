//! Shared test doubles for the game-master orchestrator client.

mod clock;
mod transport;

pub use clock::{FixedClock, fixed_clock};
pub use transport::{FailingTransport, GatedTransport, RecordingTransport};
