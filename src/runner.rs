//! Fixed-rate frame loop
//!
//! Each tick: wait for the deadline, render, poll quit, read keys, map them
//! to intents, then advance the simulation. A won match renders its banner,
//! holds for the configured pause and restarts.

use crate::config::Config;
use crate::input::map_intents;
use crate::platform::{InputSource, Pacer};
use crate::renderer::{Frame, Renderer};
use crate::sim::{GameEvent, GameState, tick};

/// What a finished run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Simulation ticks executed
    pub ticks: u64,
    /// Matches played to a win
    pub matches_completed: u32,
}

/// Owns the match and drives it with its collaborators
pub struct Runner<R, I, P> {
    state: GameState,
    renderer: R,
    input: I,
    pacer: P,
    summary: RunSummary,
}

impl<R: Renderer, I: InputSource, P: Pacer> Runner<R, I, P> {
    pub fn new(config: Config, renderer: R, input: I, pacer: P) -> Self {
        Self {
            state: GameState::new(config),
            renderer,
            input,
            pacer,
            summary: RunSummary::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Loop until the input source reports a quit
    pub fn run(mut self) -> RunSummary {
        log::info!(
            "Match started: first to {} at {} Hz",
            self.state.config.winning_score,
            self.state.config.tick_rate
        );
        while self.step() {}
        log::info!(
            "Quit after {} ticks, {} matches completed",
            self.summary.ticks,
            self.summary.matches_completed
        );
        self.summary
    }

    /// Run one tick; false once quit was requested
    pub fn step(&mut self) -> bool {
        self.pacer.wait_for_tick();
        self.render();

        if self.input.poll_quit() {
            return false;
        }

        let keys = self.input.key_snapshot();
        tick(&mut self.state, &map_intents(&keys));
        self.summary.ticks += 1;
        self.log_events();

        if self.state.winner().is_some() {
            // Banner frame, then nothing runs until the pause ends
            self.render();
            self.pacer.suspend(self.state.config.win_pause());
            self.state.restart_match();
            self.summary.matches_completed += 1;
            log::info!("New match");
        }
        true
    }

    fn render(&mut self) {
        let frame = Frame::new(&self.state);
        if let Err(e) = self.renderer.draw(&frame) {
            log::warn!("Render error: {:?}", e);
        }
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::WallBounce => log::trace!("Wall bounce"),
                GameEvent::PaddleBounce(side) => {
                    log::trace!("{} paddle bounce, vel {}", side.as_str(), self.state.ball.vel)
                }
                GameEvent::PointScored { side, left, right } => {
                    log::debug!("{} scores: {left}-{right}", side.as_str())
                }
                GameEvent::MatchWon(side) => log::info!(
                    "{} ({}-{})",
                    side.win_banner(),
                    self.state.score.left,
                    self.state.score.right
                ),
            }
        }
    }
}
