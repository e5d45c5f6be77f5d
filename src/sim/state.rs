//! Session state: playfield, both paddles and the ball
//!
//! Everything is owned here. The ball only ever sees the paddles through
//! shared borrows of their rectangles for the duration of a tick.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geom::Aabb;
use super::paddle::{Paddle, Side};
use crate::config::Config;
use crate::error::ConfigError;

/// Rectangles to draw for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub left: Aabb,
    pub right: Aabb,
    pub ball: Aabb,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    pub playfield: Aabb,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Number of out-of-bounds resets so far
    pub resets: u32,
    /// Face and cap hits on either paddle
    pub paddle_hits: u32,
}

impl GameState {
    /// Create a session. Fails fast on a configuration the simulation cannot honour.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let playfield = Aabb::new(0, 0, config.playfield_width, config.playfield_height);
        let state = Self {
            playfield,
            left: Paddle::new(Side::Left, &config),
            right: Paddle::new(Side::Right, &config),
            ball: Ball::new(&config),
            time_ticks: 0,
            resets: 0,
            paddle_hits: 0,
            config,
        };
        log::info!(
            "Session created: playfield {}x{}, ball speed {}..{} (super {})",
            state.playfield.width,
            state.playfield.height,
            state.config.min_speed,
            state.config.max_speed,
            state.config.super_speed()
        );
        Ok(state)
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            left: self.left.aabb,
            right: self.right.aabb,
            ball: self.ball.aabb,
        }
    }
}
