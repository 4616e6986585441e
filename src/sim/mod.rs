//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick velocities only, never wall-clock time
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, deflection_velocity, handle_collision, paddle_bounce, wall_bounce};
pub use state::{
    Ball, GameEvent, GamePhase, GameState, HorizontalDir, Paddle, Score, Side, VerticalDir,
};
pub use tick::{Intent, TickInput, tick};
