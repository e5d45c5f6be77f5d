//! Pad Pong - movement and collision engine for a two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, integration)
//! - `config`: Session configuration with validation and JSON loading
//! - `error`: Construction-time errors
//!
//! Rendering, input devices and frame pacing are left to the caller: feed a
//! [`sim::TickInput`] into [`sim::tick`] once per frame and draw the returned
//! [`sim::Frame`].

pub mod config;
pub mod error;
pub mod sim;

pub use config::Config;
pub use error::ConfigError;

use glam::Vec2;

/// Session default constants
pub mod consts {
    /// Target tick rate of the external driver
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: i32 = 500;
    pub const PLAYFIELD_HEIGHT: i32 = 400;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 75;
    /// Horizontal gap between a paddle and its playfield edge
    pub const PADDLE_OFFSET: i32 = 30;
    /// Pixels per tick
    pub const PADDLE_SPEED: i32 = 5;

    /// Ball defaults
    pub const BALL_WIDTH: i32 = 10;
    pub const BALL_HEIGHT: i32 = 10;
    pub const BALL_MIN_SPEED: f32 = 5.0;
    pub const BALL_MAX_SPEED: f32 = 10.0;
    /// Super speed = max speed * this (after a paddle end hit)
    pub const SUPER_SPEED_MULTIPLIER: f32 = 1.2;

    /// Steepest deflection off a paddle face (degrees)
    pub const MAX_ANGLE_DEG: f32 = 60.0;
    /// Ticks of travel a ball may spend outside the playfield before reset
    pub const GRACE_TICKS: u32 = 60;
}

/// Normalized angle to [-180, 180) degrees
#[inline]
pub fn normalize_angle_deg(mut angle: f32) -> f32 {
    while angle >= 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Convert polar (magnitude, degrees) to cartesian. 0° is +x, 90° is +y (screen down).
#[inline]
pub fn polar_to_cartesian(magnitude: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(magnitude * theta.cos(), magnitude * theta.sin())
}

/// Convert cartesian to polar (magnitude, degrees)
#[inline]
pub fn cartesian_to_polar(v: Vec2) -> (f32, f32) {
    (v.length(), v.y.atan2(v.x).to_degrees())
}
