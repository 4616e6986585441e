//! Match state and core simulation types
//!
//! Entities never reference each other; everything that relates two of them
//! (collisions, scoring) takes them as explicit parameters.

use glam::Vec2;

use crate::config::Config;
use crate::consts::MIDLINE_GAP;

/// Which half of the field a paddle (or a point, or a win) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Banner shown while the match is won
    pub fn win_banner(self) -> &'static str {
        match self {
            Side::Left => "Left Player Won!",
            Side::Right => "Right Player Won!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDir {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDir {
    Left,
    Right,
}

/// A player's paddle
///
/// `pos` is the top-left corner. Movement is clamped to the rectangle of
/// allowed top-left positions computed at construction: the full field height,
/// and the paddle's own half of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels moved per tick
    pub speed: f32,
    home: Vec2,
    min: Vec2,
    max: Vec2,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        let size = Vec2::new(config.paddle_width, config.paddle_height);
        let midline = config.midline();
        let home_y = (config.field_height / 2.0).floor() - (size.y / 2.0).floor();

        let (home_x, min_x, max_x) = match side {
            Side::Left => (config.paddle_inset, 0.0, midline - size.x),
            Side::Right => (
                config.field_width - config.paddle_inset - size.x,
                midline + MIDLINE_GAP,
                config.field_width - size.x,
            ),
        };
        let min = Vec2::new(min_x, 0.0);
        let max = Vec2::new(max_x, config.field_height - size.y);
        // Fractional sizes can round the centered row past the bottom limit
        let home = Vec2::new(home_x, home_y).clamp(min, max);

        Self {
            side,
            pos: home,
            size,
            speed: config.paddle_speed,
            home,
            min,
            max,
        }
    }

    /// Position restored by [`Paddle::reset`]
    #[inline]
    pub fn home(&self) -> Vec2 {
        self.home
    }

    /// Smallest and largest allowed top-left corner
    #[inline]
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.min, self.max)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move one step up or down; stops at the top and bottom walls
    pub fn move_vertical(&mut self, dir: VerticalDir) {
        let delta = match dir {
            VerticalDir::Up => -self.speed,
            VerticalDir::Down => self.speed,
        };
        self.pos.y = (self.pos.y + delta).clamp(self.min.y, self.max.y);
    }

    /// Move one step sideways; stops at the side wall and at the midline
    pub fn move_horizontal(&mut self, dir: HorizontalDir) {
        let delta = match dir {
            HorizontalDir::Left => -self.speed,
            HorizontalDir::Right => self.speed,
        };
        self.pos.x = (self.pos.x + delta).clamp(self.min.x, self.max.x);
    }

    pub fn reset(&mut self) {
        self.pos = self.home;
    }
}

/// The ball. `pos` is the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Horizontal speed, and the cap on vertical speed after a paddle hit
    pub max_speed: f32,
    home: Vec2,
}

impl Ball {
    /// A ball at the field center serving to the right
    pub fn new(config: &Config) -> Self {
        let home = config.center();
        Self {
            pos: home,
            vel: Vec2::new(config.ball_max_speed, 0.0),
            radius: config.ball_radius,
            max_speed: config.ball_max_speed,
            home,
        }
    }

    #[inline]
    pub fn home(&self) -> Vec2 {
        self.home
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Straight-line motion for one tick
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Back to center, flat trajectory, serving the other way
    pub fn reset(&mut self) {
        self.pos = self.home;
        self.vel.y = 0.0;
        self.vel.x = -self.vel.x;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add a point and return the new score for that side
    pub fn increment(&mut self, side: Side) -> u32 {
        let score = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *score += 1;
        *score
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Threshold reached; simulation frozen until the runner restarts the match
    Won { winner: Side },
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleBounce(Side),
    PointScored { side: Side, left: u32, right: u32 },
    MatchWon(Side),
}

/// Complete match state, owned by the runner
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        Self {
            left_paddle: Paddle::new(Side::Left, &config),
            right_paddle: Paddle::new(Side::Right, &config),
            ball: Ball::new(&config),
            score: Score::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            config,
        }
    }

    /// Both paddles, left first
    pub fn paddles(&self) -> [&Paddle; 2] {
        [&self.left_paddle, &self.right_paddle]
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::Won { winner } => Some(winner),
            GamePhase::Playing => None,
        }
    }

    /// Start a fresh match: scores zeroed, every entity home
    pub fn restart_match(&mut self) {
        self.ball.reset();
        self.left_paddle.reset();
        self.right_paddle.reset();
        self.score.reset();
        self.phase = GamePhase::Playing;
    }
}
