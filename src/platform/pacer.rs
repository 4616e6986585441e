//! Fixed-rate tick pacing
//!
//! The only places the game blocks: waiting for the next tick deadline, and
//! the hold after a match is won.

use std::thread;
use std::time::{Duration, Instant};

/// Scheduling primitive driven by the runner
pub trait Pacer {
    /// Block until the next tick is due
    fn wait_for_tick(&mut self);

    /// Block for `duration`; nothing else runs meanwhile
    fn suspend(&mut self, duration: Duration);
}

/// Sleeps to hold a steady tick rate
///
/// If a tick overruns its deadline the schedule is re-based on the current
/// time rather than running catch-up ticks.
#[derive(Debug)]
pub struct FixedRatePacer {
    period: Duration,
    next_deadline: Option<Instant>,
}

impl FixedRatePacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_deadline: None,
        }
    }
}

impl Pacer for FixedRatePacer {
    fn wait_for_tick(&mut self) {
        let now = Instant::now();
        let deadline = match self.next_deadline {
            Some(deadline) if deadline > now => {
                thread::sleep(deadline - now);
                deadline
            }
            _ => now,
        };
        self.next_deadline = Some(deadline + self.period);
    }

    fn suspend(&mut self, duration: Duration) {
        thread::sleep(duration);
        self.next_deadline = None;
    }
}
