//! Pong - two paddles, one ball, first to ten
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, match state)
//! - `input`: Key snapshot to paddle intent mapping
//! - `renderer`: Scene layout and terminal rasterization
//! - `platform`: Terminal input/output and tick pacing
//! - `runner`: Fixed-rate frame loop tying it all together

pub mod config;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod sim;

pub use config::Config;
pub use runner::{RunSummary, Runner};

/// Game configuration defaults
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Pixels moved per tick while a key is held
    pub const PADDLE_SPEED: f32 = 4.0;
    /// Gap between a paddle's home position and its side wall
    pub const PADDLE_INSET: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Horizontal speed of the ball, and the cap on its vertical speed (pixels/tick)
    pub const BALL_MAX_SPEED: f32 = 5.0;

    /// First side to reach this score wins the match
    pub const WINNING_SCORE: u32 = 10;
    /// How long the win banner stays up before the next match
    pub const WIN_PAUSE_MS: u64 = 5000;

    /// Gap between the midline and the right paddle's leftmost position
    pub const MIDLINE_GAP: f32 = 1.0;
}
