//! Session construction errors

use std::fmt;

/// Invalid session configuration, reported when a session is constructed
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonPositiveDimension { field: &'static str, value: i32 },
    NonPositiveSpeed { field: &'static str, value: f32 },
    SpeedRangeInverted { min_speed: f32, max_speed: f32 },
    SuperSpeedBelowMax { multiplier: f32 },
    PaddleTallerThanPlayfield { paddle_height: i32, playfield_height: i32 },
    BallLargerThanPlayfield { ball: (i32, i32), playfield: (i32, i32) },
    PaddlesOverlap { paddle_span: i32, playfield_width: i32 },
    MaxAngleOutOfRange { degrees: f32 },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimension { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::NonPositiveSpeed { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::SpeedRangeInverted {
                min_speed,
                max_speed,
            } => write!(
                f,
                "min_speed ({min_speed}) must not exceed max_speed ({max_speed})"
            ),
            Self::SuperSpeedBelowMax { multiplier } => {
                write!(f, "super_speed_multiplier must be >= 1, got {multiplier}")
            }
            Self::PaddleTallerThanPlayfield {
                paddle_height,
                playfield_height,
            } => write!(
                f,
                "paddle height {paddle_height} exceeds playfield height {playfield_height}"
            ),
            Self::BallLargerThanPlayfield { ball, playfield } => write!(
                f,
                "ball {}x{} does not fit in playfield {}x{}",
                ball.0, ball.1, playfield.0, playfield.1
            ),
            Self::PaddlesOverlap {
                paddle_span,
                playfield_width,
            } => write!(
                f,
                "paddles need {paddle_span}px but playfield is only {playfield_width}px wide"
            ),
            Self::MaxAngleOutOfRange { degrees } => {
                write!(f, "max_angle_deg must be in (0, 90), got {degrees}")
            }
            Self::Parse(msg) => write!(f, "invalid config JSON: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
