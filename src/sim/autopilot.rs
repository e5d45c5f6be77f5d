//! Demo driver: picks paddle commands by chasing the ball
//!
//! Stands in for a human at the keyboard in the headless binary and in
//! soak tests. Seeded, so a given seed always plays the same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::paddle::{PadCommand, Side};
use super::state::GameState;
use super::tick::TickInput;

/// Tuning for an autopilot paddle
#[derive(Debug, Clone, Copy)]
pub struct AutopilotParams {
    /// Pixels of slack around the paddle centre before it moves
    pub dead_zone: i32,
    /// Per-tick chance of starting a reaction lapse
    pub lapse_chance: f64,
    /// Lapse length range in ticks (inclusive)
    pub lapse_ticks: (u32, u32),
}

impl Default for AutopilotParams {
    fn default() -> Self {
        Self {
            dead_zone: 8,
            lapse_chance: 0.01,
            lapse_ticks: (15, 45),
        }
    }
}

/// One computer-controlled paddle
#[derive(Debug, Clone)]
pub struct Autopilot {
    pub side: Side,
    pub params: AutopilotParams,
    rng: Pcg32,
    lapse_left: u32,
}

impl Autopilot {
    pub fn new(side: Side, seed: u64) -> Self {
        Self::with_params(side, seed, AutopilotParams::default())
    }

    pub fn with_params(side: Side, seed: u64, params: AutopilotParams) -> Self {
        // Distinct streams per side so two autopilots with one seed differ
        let stream = match side {
            Side::Left => 0,
            Side::Right => 1,
        };
        Self {
            side,
            params,
            rng: Pcg32::seed_from_u64(seed.wrapping_mul(2).wrapping_add(stream)),
            lapse_left: 0,
        }
    }

    /// Command for this tick
    pub fn command(&mut self, state: &GameState) -> PadCommand {
        if self.lapse_left > 0 {
            self.lapse_left -= 1;
            return PadCommand::Stop;
        }
        if self.params.lapse_chance > 0.0 && self.rng.random_bool(self.params.lapse_chance) {
            let (lo, hi) = self.params.lapse_ticks;
            self.lapse_left = self.rng.random_range(lo..=hi.max(lo));
            log::debug!("{:?} autopilot lapses for {} ticks", self.side, self.lapse_left);
            return PadCommand::Stop;
        }

        let pad = state.paddle(self.side).aabb;
        let ball = &state.ball;
        let incoming = match self.side {
            Side::Left => ball.dir.x < 0.0,
            Side::Right => ball.dir.x > 0.0,
        };
        // Chase the ball when it is coming, otherwise drift back to centre
        let target = if incoming {
            ball.aabb.centery()
        } else {
            state.playfield.centery()
        };

        let offset = target - pad.centery();
        if offset < -self.params.dead_zone {
            PadCommand::Up
        } else if offset > self.params.dead_zone {
            PadCommand::Down
        } else {
            PadCommand::Stop
        }
    }
}

/// Autopilots for both paddles
pub fn both_sides(seed: u64) -> (Autopilot, Autopilot) {
    (Autopilot::new(Side::Left, seed), Autopilot::new(Side::Right, seed))
}

/// Tick input from a pair of autopilots
pub fn drive(state: &GameState, left: &mut Autopilot, right: &mut Autopilot) -> TickInput {
    TickInput {
        left: left.command(state),
        right: right.command(state),
    }
}
