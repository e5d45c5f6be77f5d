//! Whole-pixel motion with sub-pixel error carry
//!
//! Per-axis displacement follows `speed * d² * sign(d)`, not `speed * d`.
//! The fractional part lost when rounding to whole pixels is carried into the
//! next tick, so the long-run average matches the continuous displacement.
//! Half-pixel ties round to the even pixel.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Continuous displacement for one tick
#[inline]
pub fn displacement(dir: Vec2, speed: f32) -> Vec2 {
    Vec2::new(axis_step(dir.x, speed), axis_step(dir.y, speed))
}

#[inline]
fn axis_step(d: f32, speed: f32) -> f32 {
    if d == 0.0 {
        0.0
    } else {
        speed * d * d * d.signum()
    }
}

/// Carried sub-pixel remainder, each component in [-0.5, 0.5]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Integrator {
    pub error: Vec2,
}

impl Integrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.error = Vec2::ZERO;
    }

    /// Whole-pixel step for this tick; updates the carried error
    pub fn step(&mut self, dir: Vec2, speed: f32) -> IVec2 {
        let exact = displacement(dir, speed) + self.error;
        let rounded = Vec2::new(exact.x.round_ties_even(), exact.y.round_ties_even());
        self.error = exact - rounded;
        rounded.as_ivec2()
    }
}
