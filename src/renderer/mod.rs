//! Rendering module
//!
//! The simulation hands a [`Frame`] to a [`Renderer`] once per tick and never
//! reads anything back. `shapes` lays the frame out in field coordinates;
//! `canvas` rasterizes that layout onto a character grid for the terminal.

pub mod canvas;
pub mod shapes;

pub use canvas::Canvas;
pub use shapes::{Shape, scene};

use crate::sim::{Ball, GameState, Paddle};

/// Draw request for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Left paddle first
    pub paddles: [&'a Paddle; 2],
    pub ball: &'a Ball,
    pub left_score: u32,
    pub right_score: u32,
    /// Shown centered over the field while a match is won
    pub banner: Option<&'a str>,
}

impl<'a> Frame<'a> {
    /// Snapshot the current state; carries the win banner if the match is won
    pub fn new(state: &'a GameState) -> Self {
        Self {
            paddles: state.paddles(),
            ball: &state.ball,
            left_score: state.score.left,
            right_score: state.score.right,
            banner: state.winner().map(|side| side.win_banner()),
        }
    }
}

/// Sink for frames: clear, draw, present
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>) -> std::io::Result<()>;
}
