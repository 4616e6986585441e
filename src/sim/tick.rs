//! Fixed timestep simulation tick
//!
//! All velocities are per tick, so a tick is the unit of simulated time and a
//! given input sequence always produces the same match.

use super::collision::handle_collision;
use super::state::{GameEvent, GamePhase, GameState, HorizontalDir, Paddle, Side, VerticalDir};

/// One movement request for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
}

impl Intent {
    /// Apply this intent to a paddle
    pub fn apply(self, paddle: &mut Paddle) {
        match self {
            Intent::Up => paddle.move_vertical(VerticalDir::Up),
            Intent::Down => paddle.move_vertical(VerticalDir::Down),
            Intent::Left => paddle.move_horizontal(HorizontalDir::Left),
            Intent::Right => paddle.move_horizontal(HorizontalDir::Right),
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: Option<Intent>,
    pub right: Option<Intent>,
}

/// Advance the match by one tick
///
/// Order: paddle intents, ball motion, collisions, scoring, win check.
/// Does nothing while the match is won; the runner owns the pause and calls
/// [`GameState::restart_match`] afterwards.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if let GamePhase::Won { .. } = state.phase {
        return;
    }

    state.time_ticks += 1;

    if let Some(intent) = input.left {
        intent.apply(&mut state.left_paddle);
    }
    if let Some(intent) = input.right {
        intent.apply(&mut state.right_paddle);
    }

    state.ball.advance();

    let collision = handle_collision(
        &mut state.ball,
        &state.left_paddle,
        &state.right_paddle,
        state.config.field_height,
    );
    if collision.wall {
        state.events.push(GameEvent::WallBounce);
    }
    if let Some(side) = collision.paddle {
        state.events.push(GameEvent::PaddleBounce(side));
    }

    check_scoring(state);
    check_win(state);
}

/// Award a point when the ball leaves the field past either side wall
fn check_scoring(state: &mut GameState) {
    let scorer = if state.ball.pos.x < 0.0 {
        Side::Right
    } else if state.ball.pos.x > state.config.field_width {
        Side::Left
    } else {
        return;
    };

    state.score.increment(scorer);
    // Paddles stay where they are between points
    state.ball.reset();
    state.events.push(GameEvent::PointScored {
        side: scorer,
        left: state.score.left,
        right: state.score.right,
    });
}

/// Freeze the match once either side reaches the winning score
fn check_win(state: &mut GameState) {
    let threshold = state.config.winning_score;
    let winner = if state.score.left >= threshold {
        Side::Left
    } else if state.score.right >= threshold {
        Side::Right
    } else {
        return;
    };

    state.phase = GamePhase::Won { winner };
    state.events.push(GameEvent::MatchWon(winner));
}
