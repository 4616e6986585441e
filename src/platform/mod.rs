//! Platform abstraction layer
//!
//! Handles the outside world for the runner:
//! - Time/ticks (`pacer`)
//! - Input events and held-key tracking (`keyboard`)
//! - Terminal setup and drawing (`terminal`)

pub mod keyboard;
pub mod pacer;
pub mod terminal;

pub use keyboard::{KeyTracker, TerminalInput};
pub use pacer::{FixedRatePacer, Pacer};
pub use terminal::{TerminalGuard, TerminalRenderer};

use crate::input::KeySnapshot;

/// Source of quit requests and held keys, polled once per tick
pub trait InputSource {
    /// Drain pending events; true if the player asked to quit
    fn poll_quit(&mut self) -> bool;

    /// Keys held right now
    fn key_snapshot(&mut self) -> KeySnapshot;
}
