//! Pong entry point
//!
//! Left paddle: W/S/A/D. Right paddle: arrow keys. Esc or Q quits.
//! Logging goes to stderr (`RUST_LOG=info pong 2> pong.log`); set
//! `PONG_CONFIG` to a JSON file to override the defaults.

use anyhow::{Context, Result};

use pong::platform::{FixedRatePacer, TerminalGuard, TerminalInput, TerminalRenderer};
use pong::{Config, Runner};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Pong starting...");

    let config = Config::load().context("loading configuration")?;
    log::info!(
        "Field {}x{}, paddles {}x{}, ball radius {}",
        config.field_width,
        config.field_height,
        config.paddle_width,
        config.paddle_height,
        config.ball_radius
    );

    let guard = TerminalGuard::enter().context("setting up terminal")?;
    let renderer = TerminalRenderer::new(&config).context("reading terminal size")?;
    let input = TerminalInput::new(guard.key_release_events());
    let pacer = FixedRatePacer::new(config.tick_period());

    let summary = Runner::new(config, renderer, input, pacer).run();
    drop(guard);

    println!(
        "Thanks for playing: {} matches in {} ticks",
        summary.matches_completed, summary.ticks
    );
    Ok(())
}
