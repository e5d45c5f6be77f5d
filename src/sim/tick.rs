//! Fixed-rate simulation tick
//!
//! Paddles move first under this tick's commands, then the ball is resolved
//! against the freshly moved paddles.

use serde::{Deserialize, Serialize};

use super::collision::Collision;
use super::paddle::PadCommand;
use super::state::{Frame, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PadCommand,
    pub right: PadCommand,
}

/// What happened this tick and where everything ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub collision: Collision,
    pub frame: Frame,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    state.left.set_command(input.left);
    state.right.set_command(input.right);
    state.left.update(&state.playfield);
    state.right.update(&state.playfield);

    let collision = state.ball.update(
        &state.left.aabb,
        &state.right.aabb,
        &state.playfield,
        &state.config,
    );
    match collision {
        Collision::OutOfBounds => state.resets += 1,
        Collision::LongSide(_) | Collision::End(_) => state.paddle_hits += 1,
        Collision::Boundary(_) | Collision::None => {}
    }

    state.time_ticks += 1;
    TickReport {
        collision,
        frame: state.frame(),
    }
}
