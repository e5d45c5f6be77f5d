//! Session configuration
//!
//! Fixed for the lifetime of a session. Loaded from JSON or built from defaults,
//! then validated once when the session is created.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Session constants for playfield, paddles and ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Playfield ===
    pub playfield_width: i32,
    pub playfield_height: i32,

    // === Paddles ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Gap between each paddle and its side of the playfield
    pub paddle_offset: i32,
    /// Pixels moved per tick while a command is held
    pub paddle_speed: i32,

    // === Ball ===
    pub ball_width: i32,
    pub ball_height: i32,
    /// Speed after a reset and after a dead-centre paddle hit
    pub min_speed: f32,
    /// Speed after a hit on the very edge of a paddle face
    pub max_speed: f32,
    /// Applied to max_speed after a paddle end hit
    pub super_speed_multiplier: f32,

    // === Rules ===
    /// Steepest deflection angle off a paddle face (degrees)
    pub max_angle_deg: f32,
    /// Out-of-bounds grace, in ticks of travel at the current speed
    pub grace_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_offset: PADDLE_OFFSET,
            paddle_speed: PADDLE_SPEED,

            ball_width: BALL_WIDTH,
            ball_height: BALL_HEIGHT,
            min_speed: BALL_MIN_SPEED,
            max_speed: BALL_MAX_SPEED,
            super_speed_multiplier: SUPER_SPEED_MULTIPLIER,

            max_angle_deg: MAX_ANGLE_DEG,
            grace_ticks: GRACE_TICKS,
        }
    }
}

impl Config {
    /// Speed forced after a paddle end hit
    pub fn super_speed(&self) -> f32 {
        self.max_speed * self.super_speed_multiplier
    }

    /// Parse a config from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_width", self.ball_width),
            ("ball_height", self.ball_height),
        ];
        for (field, value) in dims {
            if value <= 0 {
                return Err(ConfigError::NonPositiveDimension { field, value });
            }
        }
        if self.paddle_offset < 0 {
            return Err(ConfigError::NonPositiveDimension {
                field: "paddle_offset",
                value: self.paddle_offset,
            });
        }

        if self.min_speed.is_nan() || self.min_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed {
                field: "min_speed",
                value: self.min_speed,
            });
        }
        if self.max_speed.is_nan() || self.max_speed < self.min_speed {
            return Err(ConfigError::SpeedRangeInverted {
                min_speed: self.min_speed,
                max_speed: self.max_speed,
            });
        }
        if self.super_speed_multiplier.is_nan() || self.super_speed_multiplier < 1.0 {
            return Err(ConfigError::SuperSpeedBelowMax {
                multiplier: self.super_speed_multiplier,
            });
        }

        if self.paddle_height > self.playfield_height {
            return Err(ConfigError::PaddleTallerThanPlayfield {
                paddle_height: self.paddle_height,
                playfield_height: self.playfield_height,
            });
        }
        if self.ball_width > self.playfield_width || self.ball_height > self.playfield_height {
            return Err(ConfigError::BallLargerThanPlayfield {
                ball: (self.ball_width, self.ball_height),
                playfield: (self.playfield_width, self.playfield_height),
            });
        }
        let paddle_span = 2 * (self.paddle_offset + self.paddle_width);
        if paddle_span >= self.playfield_width {
            return Err(ConfigError::PaddlesOverlap {
                paddle_span,
                playfield_width: self.playfield_width,
            });
        }

        if !(0.0..90.0).contains(&self.max_angle_deg) || self.max_angle_deg == 0.0 {
            return Err(ConfigError::MaxAngleOutOfRange {
                degrees: self.max_angle_deg,
            });
        }

        Ok(())
    }
}
