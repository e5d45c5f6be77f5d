//! Pad Pong headless runner
//!
//! Plays a session between two autopilots without rendering or frame pacing
//! and prints a JSON summary.
//!
//! Usage: `pad-pong [--ticks N] [--config config.json] [--seed S]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use pad_pong::Config;
use pad_pong::consts::TICKS_PER_SECOND;
use pad_pong::sim::{Collision, Frame, GameState, autopilot, tick};

#[derive(Parser, Debug)]
#[command(name = "pad-pong")]
#[command(about = "Run a headless Pad Pong session between two autopilots")]
struct Cli {
    /// Number of ticks to simulate (default: one minute at 60 Hz)
    #[arg(long, default_value_t = u64::from(TICKS_PER_SECOND) * 60)]
    ticks: u64,
    /// JSON session config; defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,
    /// Autopilot RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

/// Printed to stdout when the run ends
#[derive(Debug, Serialize)]
struct Summary {
    ticks: u64,
    seconds: f32,
    paddle_hits: u32,
    boundary_hits: u32,
    resets: u32,
    final_speed: f32,
    frame: Frame,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    log::info!(
        "Pad Pong (headless) running {} ticks with seed {}",
        cli.ticks,
        cli.seed
    );
    let mut state = GameState::new(config).context("invalid session config")?;
    let (mut left, mut right) = autopilot::both_sides(cli.seed);

    let mut boundary_hits = 0;
    for _ in 0..cli.ticks {
        let input = autopilot::drive(&state, &mut left, &mut right);
        let report = tick(&mut state, &input);
        if let Collision::Boundary(_) = report.collision {
            boundary_hits += 1;
        }
    }

    let summary = Summary {
        ticks: state.time_ticks,
        seconds: state.time_ticks as f32 / TICKS_PER_SECOND as f32,
        paddle_hits: state.paddle_hits,
        boundary_hits,
        resets: state.resets,
        final_speed: state.ball.speed,
        frame: state.frame(),
    };
    log::info!(
        "Done: {} paddle hits, {} resets",
        summary.paddle_hits,
        summary.resets
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = Config::from_json(&json)
        .inspect_err(|e| log::warn!("Rejected {}: {}", path.display(), e))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}
