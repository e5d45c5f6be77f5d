//! Player paddles

use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use crate::config::Config;
use glam::IVec2;

/// Per-tick movement command from the input driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PadCommand {
    Up,
    Down,
    #[default]
    Stop,
}

/// Which side of the playfield a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub aabb: Aabb,
    /// Pixels per tick
    pub speed: i32,
    pub command: PadCommand,
}

impl Paddle {
    /// Paddle at its side's offset from the playfield edge, vertically centred
    pub fn new(side: Side, config: &Config) -> Self {
        let left = match side {
            Side::Left => config.paddle_offset,
            Side::Right => config.playfield_width - config.paddle_offset - config.paddle_width,
        };
        Self {
            side,
            aabb: Aabb::from_center(
                left + config.paddle_width / 2,
                config.playfield_height / 2,
                config.paddle_width,
                config.paddle_height,
            ),
            speed: config.paddle_speed,
            command: PadCommand::Stop,
        }
    }

    pub fn set_command(&mut self, command: PadCommand) {
        self.command = command;
    }

    /// Translate one step under the current command. A step that would leave
    /// the playfield is skipped entirely.
    pub fn update(&mut self, playfield: &Aabb) {
        let dy = match self.command {
            PadCommand::Up if self.aabb.top - self.speed >= playfield.top => -self.speed,
            PadCommand::Down if self.aabb.bottom() + self.speed <= playfield.bottom() => {
                self.speed
            }
            _ => return,
        };
        self.aabb = self.aabb.translated(IVec2::new(0, dy));
    }
}
