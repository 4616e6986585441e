//! Match configuration
//!
//! Loaded once at start-up from an optional JSON file and passed down to
//! everything that needs field dimensions or tuning.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "PONG_CONFIG";

/// Field geometry, entity sizes and match rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per tick
    pub paddle_speed: f32,
    /// Distance from the side wall to the paddle's home position
    pub paddle_inset: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Pixels per tick
    pub ball_max_speed: f32,

    // === Timing / rules ===
    pub tick_rate: u32,
    pub winning_score: u32,
    pub win_pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,

            ball_radius: BALL_RADIUS,
            ball_max_speed: BALL_MAX_SPEED,

            tick_rate: TICK_RATE,
            winning_score: WINNING_SCORE,
            win_pause_ms: WIN_PAUSE_MS,
        }
    }
}

impl Config {
    /// Load config from the file named by `PONG_CONFIG`, or defaults if unset
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a JSON config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("loading config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON document; missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("parsing config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot honor
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_max_speed", self.ball_max_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                bail!("{name} must be a positive number, got {value}");
            }
        }
        if !(self.paddle_inset.is_finite() && self.paddle_inset >= 0.0) {
            bail!("paddle_inset must not be negative, got {}", self.paddle_inset);
        }
        if self.tick_rate == 0 {
            bail!("tick_rate must be at least 1");
        }
        if self.winning_score == 0 {
            bail!("winning_score must be at least 1");
        }
        if self.paddle_height > self.field_height {
            bail!(
                "paddle_height {} does not fit in field_height {}",
                self.paddle_height,
                self.field_height
            );
        }
        // Both paddles must fit between their home inset and the midline
        if self.paddle_inset + self.paddle_width > self.midline() - MIDLINE_GAP {
            bail!(
                "paddle_width {} plus paddle_inset {} crosses the midline at {}",
                self.paddle_width,
                self.paddle_inset,
                self.midline()
            );
        }
        Ok(())
    }

    /// X coordinate splitting the field into the two paddle zones
    #[inline]
    pub fn midline(&self) -> f32 {
        (self.field_width / 2.0).floor()
    }

    /// Ball serve position
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.field_width / 2.0).floor(),
            (self.field_height / 2.0).floor(),
        )
    }

    #[inline]
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    /// Wall-clock length of one tick
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate as f64)
    }

    /// Wall-clock length of the win banner hold
    pub fn win_pause(&self) -> Duration {
        Duration::from_millis(self.win_pause_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.midline(), 350.0);
        assert_eq!(config.center(), Vec2::new(350.0, 250.0));
        assert_eq!(config.win_pause(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = Config::from_json(r#"{ "winning_score": 3, "tick_rate": 30 }"#).unwrap();
        assert_eq!(config.winning_score, 3);
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.field_width, FIELD_WIDTH);
        assert_eq!(config.paddle_height, PADDLE_HEIGHT);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_json(r#"{ "tick_rate": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "winning_score": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "ball_max_speed": -1.0 }"#).is_err());
        assert!(Config::from_json(r#"{ "paddle_height": 600.0 }"#).is_err());
        assert!(Config::from_json(r#"{ "paddle_width": 400.0 }"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_odd_width_midline_floors() {
        let config = Config {
            field_width: 701.0,
            ..Default::default()
        };
        assert_eq!(config.midline(), 350.0);
    }
}
