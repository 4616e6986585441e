//! Terminal keyboard input
//!
//! Terminals report key presses, not key state. When the terminal supports
//! release events we track held keys exactly; otherwise a key counts as held
//! for a few ticks after its last press or auto-repeat.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputSource;
use crate::input::{KeySnapshot, LogicalKey};

/// Ticks a key stays held without a release event (covers the initial
/// auto-repeat delay of most terminals at 60 Hz)
pub const DEFAULT_HOLD_TICKS: u32 = 30;

/// Physical key for each logical key: WASD for the left paddle, arrows for the right
pub fn logical_key(code: KeyCode) -> Option<LogicalKey> {
    let key = match code {
        KeyCode::Char('w') | KeyCode::Char('W') => LogicalKey::LeftUp,
        KeyCode::Char('s') | KeyCode::Char('S') => LogicalKey::LeftDown,
        KeyCode::Char('a') | KeyCode::Char('A') => LogicalKey::LeftLeft,
        KeyCode::Char('d') | KeyCode::Char('D') => LogicalKey::LeftRight,
        KeyCode::Up => LogicalKey::RightUp,
        KeyCode::Down => LogicalKey::RightDown,
        KeyCode::Left => LogicalKey::RightLeft,
        KeyCode::Right => LogicalKey::RightRight,
        _ => return None,
    };
    Some(key)
}

/// Esc, q or Ctrl-C
pub fn is_quit(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Held-key bookkeeping from a stream of key events
#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// None: held until released. Some(n): held for n ticks after each press.
    hold_ticks: Option<u32>,
    remaining: [u32; 8],
}

impl KeyTracker {
    /// For terminals that report releases
    pub fn exact() -> Self {
        Self {
            hold_ticks: None,
            remaining: [0; 8],
        }
    }

    /// For terminals that only report presses and repeats
    pub fn decaying(hold_ticks: u32) -> Self {
        Self {
            hold_ticks: Some(hold_ticks),
            remaining: [0; 8],
        }
    }

    pub fn on_event(&mut self, key: LogicalKey, kind: KeyEventKind) {
        let slot = &mut self.remaining[key as usize];
        *slot = match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.hold_ticks.unwrap_or(u32::MAX),
            KeyEventKind::Release => 0,
        };
    }

    /// Forget every held key, e.g. when releases can no longer be seen
    pub fn release_all(&mut self) {
        self.remaining = [0; 8];
    }

    /// Keys held this tick; ages decaying holds by one tick
    pub fn tick(&mut self) -> KeySnapshot {
        let mut snapshot = KeySnapshot::new();
        for key in LogicalKey::ALL {
            let slot = &mut self.remaining[key as usize];
            if *slot > 0 {
                snapshot.press(key);
                if self.hold_ticks.is_some() {
                    *slot -= 1;
                }
            }
        }
        snapshot
    }
}

/// Reads crossterm events without blocking
#[derive(Debug)]
pub struct TerminalInput {
    keys: KeyTracker,
}

impl TerminalInput {
    /// `release_events`: whether the terminal was set up to report key releases
    pub fn new(release_events: bool) -> Self {
        let keys = if release_events {
            KeyTracker::exact()
        } else {
            KeyTracker::decaying(DEFAULT_HOLD_TICKS)
        };
        Self { keys }
    }

    fn drain_events(&mut self) -> std::io::Result<bool> {
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if is_quit(&key) => quit = true,
                Event::Key(key) => {
                    if let Some(logical) = logical_key(key.code) {
                        self.keys.on_event(logical, key.kind);
                    }
                }
                // Releases while unfocused go to another window
                Event::FocusLost => {
                    log::debug!("Focus lost, releasing held keys");
                    self.keys.release_all();
                }
                _ => {}
            }
        }
        Ok(quit)
    }
}

impl InputSource for TerminalInput {
    fn poll_quit(&mut self) -> bool {
        match self.drain_events() {
            Ok(quit) => quit,
            Err(e) => {
                log::error!("Input error, stopping: {e}");
                true
            }
        }
    }

    fn key_snapshot(&mut self) -> KeySnapshot {
        self.keys.tick()
    }
}
