//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick, whole-pixel positions
//! - Seeded RNG only (autopilot)
//! - Fixed update order: left paddle, right paddle, ball
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod ball;
pub mod collision;
pub mod deflect;
pub mod geom;
pub mod integrator;
pub mod paddle;
pub mod state;
pub mod tick;

pub use autopilot::{Autopilot, AutopilotParams};
pub use ball::{Ball, BallPhase};
pub use collision::{BallProbe, Collision, Edge, detect};
pub use deflect::Deflection;
pub use geom::{Aabb, reflect};
pub use integrator::Integrator;
pub use paddle::{PadCommand, Paddle, Side};
pub use state::{Frame, GameState};
pub use tick::{TickInput, TickReport, tick};
