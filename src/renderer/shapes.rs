//! Shape generation for 2D primitives
//!
//! Lays a [`Frame`] out as field-space primitives. Backends only rasterize;
//! every placement decision lives here.

use glam::Vec2;

use super::Frame;
use crate::config::Config;

/// Vertical position of the top of the score digits
pub const SCORE_TOP: f32 = 20.0;
/// Width of one centerline dash
pub const DASH_WIDTH: f32 = 10.0;
/// Offset of the first centerline dash from the top wall
pub const DASH_START: u32 = 10;
/// Number of dash-sized steps along the field height
const DASH_STEPS: u32 = 20;

/// A drawable primitive in field coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled axis-aligned rectangle; `min` is the top-left corner
    Rect { min: Vec2, size: Vec2 },
    /// Filled circle
    Circle { center: Vec2, radius: f32 },
    /// Text horizontally centered on `anchor.x`, top at `anchor.y`
    Text { anchor: Vec2, text: String },
}

/// Dashed centerline: one dash every other step down the field
pub fn centerline(config: &Config) -> Vec<Shape> {
    let height = config.field_height as u32;
    let step = (height / DASH_STEPS).max(1);
    let x = config.field_width.floor() as u32 / 2;

    (DASH_START..height)
        .step_by(step as usize)
        .filter(|y| y % 2 == 0)
        .map(|y| Shape::Rect {
            min: Vec2::new(x as f32 - DASH_WIDTH / 2.0, y as f32),
            size: Vec2::new(DASH_WIDTH, step as f32),
        })
        .collect()
}

/// Everything drawn for one frame, back to front
pub fn scene(frame: &Frame<'_>, config: &Config) -> Vec<Shape> {
    let width = config.field_width;
    let mut shapes = Vec::with_capacity(32);

    shapes.push(Shape::Text {
        anchor: Vec2::new(width / 4.0, SCORE_TOP),
        text: frame.left_score.to_string(),
    });
    shapes.push(Shape::Text {
        anchor: Vec2::new(width * 3.0 / 4.0, SCORE_TOP),
        text: frame.right_score.to_string(),
    });

    for paddle in frame.paddles {
        shapes.push(Shape::Rect {
            min: paddle.pos,
            size: paddle.size,
        });
    }

    shapes.extend(centerline(config));

    shapes.push(Shape::Circle {
        center: frame.ball.pos,
        radius: frame.ball.radius,
    });

    if let Some(banner) = frame.banner {
        shapes.push(Shape::Text {
            anchor: config.center(),
            text: banner.to_string(),
        });
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState, Side};

    #[test]
    fn test_centerline_dashes() {
        let dashes = centerline(&Config::default());
        // Steps of 25 from 10: only the even offsets 10, 60, 110, ... are drawn
        assert_eq!(dashes.len(), 10);
        assert_eq!(
            dashes[0],
            Shape::Rect {
                min: Vec2::new(345.0, 10.0),
                size: Vec2::new(10.0, 25.0),
            }
        );
        assert_eq!(
            dashes[1],
            Shape::Rect {
                min: Vec2::new(345.0, 60.0),
                size: Vec2::new(10.0, 25.0),
            }
        );
    }

    #[test]
    fn test_scene_layout() {
        let mut state = GameState::new(Config::default());
        state.phase = GamePhase::Won { winner: Side::Left };
        let shapes = scene(&Frame::new(&state), &state.config);

        assert_eq!(
            shapes[0],
            Shape::Text {
                anchor: Vec2::new(175.0, SCORE_TOP),
                text: "0".into(),
            }
        );
        assert_eq!(
            shapes[1],
            Shape::Text {
                anchor: Vec2::new(525.0, SCORE_TOP),
                text: "0".into(),
            }
        );
        assert_eq!(
            shapes[2],
            Shape::Rect {
                min: Vec2::new(10.0, 200.0),
                size: Vec2::new(20.0, 100.0),
            }
        );
        assert!(shapes.contains(&Shape::Circle {
            center: Vec2::new(350.0, 250.0),
            radius: 12.0,
        }));
        assert_eq!(
            shapes.last(),
            Some(&Shape::Text {
                anchor: Vec2::new(350.0, 250.0),
                text: "Left Player Won!".into(),
            })
        );
    }

    #[test]
    fn test_no_banner_while_playing() {
        let state = GameState::new(Config::default());
        let shapes = scene(&Frame::new(&state), &state.config);
        assert!(matches!(shapes.last(), Some(Shape::Circle { .. })));
    }
}
