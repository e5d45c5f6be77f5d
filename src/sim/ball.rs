//! The ball and its per-tick controller (detect, deflect, integrate)

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::{BallProbe, Collision, detect};
use super::deflect;
use super::geom::Aabb;
use super::integrator::Integrator;
use super::paddle::Side;
use crate::config::Config;

/// Ball lifecycle. There is no terminal state: every reset leads back to flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallPhase {
    /// Sitting at home for the tick in which it was reset
    Reset,
    InFlight,
}

/// The game ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub aabb: Aabb,
    /// Direction of travel; only its shape and signs matter to the motion law
    pub dir: Vec2,
    pub speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub super_speed: f32,
    pub phase: BallPhase,
    /// Horizontal sign of the next serve, flips on every reset
    pub start_sign: f32,
    /// Top-left corner that centres the ball on the playfield
    pub home: IVec2,
    pub integrator: Integrator,
}

impl Ball {
    /// Ball at home, serving rightward at min speed
    pub fn new(config: &Config) -> Self {
        let home = IVec2::new(
            (config.playfield_width - config.ball_width) / 2,
            (config.playfield_height - config.ball_height) / 2,
        );
        Self {
            aabb: Aabb::new(home.x, home.y, config.ball_width, config.ball_height),
            dir: Vec2::X,
            speed: config.min_speed,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            super_speed: config.super_speed(),
            phase: BallPhase::Reset,
            start_sign: 1.0,
            home,
            integrator: Integrator::new(),
        }
    }

    pub fn probe(&self) -> BallProbe {
        BallProbe {
            aabb: self.aabb,
            dir: self.dir,
            speed: self.speed,
        }
    }

    /// Speed never leaves [min_speed, super_speed]
    pub fn speed_in_bounds(&self) -> bool {
        self.speed >= self.min_speed && self.speed <= self.super_speed
    }

    /// Back to home at min speed, serving toward the side opposite the last serve
    pub fn reset(&mut self) {
        self.start_sign = -self.start_sign;
        self.dir = Vec2::new(self.start_sign, 0.0);
        self.speed = self.min_speed;
        self.aabb = self.aabb.with_top_left(self.home);
        self.integrator.clear();
        self.phase = BallPhase::Reset;
    }

    /// Apply the response for a classified collision
    pub fn respond(&mut self, collision: Collision, left: &Aabb, right: &Aabb, config: &Config) {
        match collision {
            Collision::None => {}
            Collision::OutOfBounds => self.reset(),
            Collision::LongSide(side) => {
                let pad = match side {
                    Side::Left => left,
                    Side::Right => right,
                };
                let d = deflect::long_side(side, &self.aabb, pad, config);
                self.dir = d.dir;
                self.speed = d.speed;
            }
            Collision::End(_) => {
                let d = deflect::end(self.dir, config);
                self.dir = d.dir;
                self.speed = d.speed;
            }
            Collision::Boundary(_) => self.dir = deflect::boundary(self.dir),
        }
    }

    /// Advance one whole-pixel step
    pub fn integrate(&mut self) {
        let step = self.integrator.step(self.dir, self.speed);
        self.aabb = self.aabb.translated(step);
    }

    /// One tick: detect against the paddles and playfield, respond, then move.
    /// A reset tick leaves the ball at home without moving it.
    pub fn update(
        &mut self,
        left: &Aabb,
        right: &Aabb,
        playfield: &Aabb,
        config: &Config,
    ) -> Collision {
        let collision = detect(&self.probe(), left, right, playfield, config.grace_ticks);
        match collision {
            Collision::None => log::trace!("ball at {:?}", self.aabb.top_left()),
            Collision::OutOfBounds => log::info!(
                "ball out of bounds at {:?}, serving {}",
                self.aabb.top_left(),
                if self.start_sign > 0.0 { "left" } else { "right" }
            ),
            hit => log::debug!("{:?} at {:?}", hit, self.aabb.top_left()),
        }

        self.respond(collision, left, right, config);
        if collision == Collision::OutOfBounds {
            return collision;
        }

        self.phase = BallPhase::InFlight;
        self.integrate();
        collision
    }
}
