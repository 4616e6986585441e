//! Collision detection and response
//!
//! Three checks per tick, in order: top/bottom walls, then whichever paddle
//! the ball is travelling toward. Positions are never corrected after a hit;
//! the ball may overlap a wall or paddle by up to one tick of travel.

use super::state::{Ball, Paddle, Side};

/// What the ball hit this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Vertical velocity was inverted by the top or bottom wall
    pub wall: bool,
    /// Ball was returned by this side's paddle
    pub paddle: Option<Side>,
}

/// Resolve wall and paddle contact for one tick
pub fn handle_collision(
    ball: &mut Ball,
    left_paddle: &Paddle,
    right_paddle: &Paddle,
    field_height: f32,
) -> CollisionResult {
    let wall = wall_bounce(ball, field_height);

    // Only the paddle the ball is approaching can be hit
    let paddle = if ball.vel.x < 0.0 {
        left_paddle
    } else {
        right_paddle
    };
    let paddle = paddle_bounce(ball, paddle).then_some(paddle.side);

    CollisionResult { wall, paddle }
}

/// Invert vertical velocity if the ball touches the floor or ceiling
pub fn wall_bounce(ball: &mut Ball, field_height: f32) -> bool {
    if ball.bottom() >= field_height || ball.top() <= 0.0 {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Whether the ball's center is level with the paddle and its leading edge
/// has reached the paddle's facing edge
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    let level = ball.pos.y >= paddle.top() && ball.pos.y <= paddle.bottom();
    let reached = match paddle.side {
        Side::Left => ball.left() <= paddle.right(),
        Side::Right => ball.right() >= paddle.left(),
    };
    level && reached
}

/// Vertical velocity after hitting `paddle` at height `contact_y`
///
/// Proportional to the distance from the paddle midpoint: zero at the middle,
/// `max_speed` at either end. Hits above the midpoint send the ball up.
pub fn deflection_velocity(contact_y: f32, paddle: &Paddle, max_speed: f32) -> f32 {
    let offset = paddle.center_y() - contact_y;
    let reduction_factor = (paddle.size.y / 2.0) / max_speed;
    -(offset / reduction_factor)
}

/// Return the ball off `paddle` if they are in contact
///
/// Horizontal speed snaps back to exactly `max_speed`, pointing away from the
/// paddle; vertical speed comes from [`deflection_velocity`].
pub fn paddle_bounce(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !paddle_contact(ball, paddle) {
        return false;
    }

    ball.vel.x = match paddle.side {
        Side::Left => ball.max_speed,
        Side::Right => -ball.max_speed,
    };
    ball.vel.y = deflection_velocity(ball.pos.y, paddle, ball.max_speed);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use glam::Vec2;

    fn setup() -> (Config, Ball, Paddle, Paddle) {
        let config = Config::default();
        let ball = Ball::new(&config);
        let left = Paddle::new(Side::Left, &config);
        let right = Paddle::new(Side::Right, &config);
        (config, ball, left, right)
    }

    /// Place the ball so its right edge touches the right paddle at height `y`
    fn touching_right(ball: &mut Ball, right: &Paddle, y: f32) {
        ball.pos = Vec2::new(right.left() - ball.radius, y);
        ball.vel = Vec2::new(5.0, 0.0);
    }

    #[test]
    fn test_center_hit_is_pure_reversal() {
        let (config, mut ball, left, right) = setup();
        assert_eq!((right.top(), right.bottom()), (200.0, 300.0));
        touching_right(&mut ball, &right, 250.0);

        let result = handle_collision(&mut ball, &left, &right, config.field_height);
        assert_eq!(result.paddle, Some(Side::Right));
        assert!(!result.wall);
        assert_eq!(ball.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_off_center_hit_deflects() {
        let (config, mut ball, left, right) = setup();
        touching_right(&mut ball, &right, 210.0);

        handle_collision(&mut ball, &left, &right, config.field_height);
        assert_eq!(ball.vel, Vec2::new(-5.0, -4.0));
    }

    #[test]
    fn test_edge_hits_saturate() {
        let (config, mut ball, left, right) = setup();

        touching_right(&mut ball, &right, right.top());
        handle_collision(&mut ball, &left, &right, config.field_height);
        assert_eq!(ball.vel.y, -config.ball_max_speed);

        touching_right(&mut ball, &right, right.bottom());
        handle_collision(&mut ball, &left, &right, config.field_height);
        assert_eq!(ball.vel.y, config.ball_max_speed);
    }

    #[test]
    fn test_left_edge_hits_saturate() {
        let (config, mut ball, left, right) = setup();
        let max = config.ball_max_speed;

        for (y, expected) in [(left.top(), -max), (left.bottom(), max)] {
            ball.pos = Vec2::new(left.right() + ball.radius, y);
            ball.vel = Vec2::new(-5.0, 0.0);
            let result = handle_collision(&mut ball, &left, &right, config.field_height);
            assert_eq!(result.paddle, Some(Side::Left));
            assert_eq!(ball.vel, Vec2::new(5.0, expected));
        }
    }

    #[test]
    fn test_left_paddle_returns_ball_right() {
        let (config, mut ball, left, right) = setup();
        ball.pos = Vec2::new(left.right() + ball.radius, 275.0);
        ball.vel = Vec2::new(-5.0, 2.0);

        let result = handle_collision(&mut ball, &left, &right, config.field_height);
        assert_eq!(result.paddle, Some(Side::Left));
        assert_eq!(ball.vel, Vec2::new(5.0, 2.5));
    }

    #[test]
    fn test_ball_outside_span_passes() {
        let (config, mut ball, left, right) = setup();
        touching_right(&mut ball, &right, right.bottom() + 1.0);

        let result = handle_collision(&mut ball, &left, &right, config.field_height);
        assert_eq!(result.paddle, None);
        assert_eq!(ball.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_receding_paddle_ignored() {
        let (config, mut ball, left, right) = setup();
        // Touching the right paddle but already moving away from it
        touching_right(&mut ball, &right, 250.0);
        ball.vel = Vec2::new(-5.0, 0.0);

        let result = handle_collision(&mut ball, &left, &right, config.field_height);
        assert_eq!(result.paddle, None);
        assert_eq!(ball.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_wall_bounce_without_clamping() {
        let (config, mut ball, _, _) = setup();
        ball.pos = Vec2::new(350.0, config.field_height - ball.radius + 2.0);
        ball.vel = Vec2::new(5.0, 3.0);

        assert!(wall_bounce(&mut ball, config.field_height));
        assert_eq!(ball.vel, Vec2::new(5.0, -3.0));
        // Overlap is left as-is
        assert_eq!(ball.pos.y, config.field_height - ball.radius + 2.0);

        ball.pos.y = ball.radius;
        assert!(wall_bounce(&mut ball, config.field_height));
        assert_eq!(ball.vel.y, 3.0);

        ball.pos.y = 250.0;
        assert!(!wall_bounce(&mut ball, config.field_height));
    }
}
