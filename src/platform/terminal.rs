//! Terminal setup and frame output (crossterm)

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{execute, queue};
use glam::Vec2;

use crate::config::Config;
use crate::renderer::{Canvas, Frame, Renderer, scene};

pub const WINDOW_TITLE: &str = "Pong!";

/// Raw mode + alternate screen for as long as it lives
///
/// Dropping it restores the terminal, on every exit path.
#[derive(Debug)]
pub struct TerminalGuard {
    key_release_events: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on Drop undoes whatever succeeded
        let mut guard = Self {
            key_release_events: false,
        };

        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            Hide,
            SetTitle(WINDOW_TITLE),
            EnableFocusChange,
            Clear(ClearType::All)
        )?;

        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            guard.key_release_events = true;
        }
        log::info!(
            "Terminal ready (key release events: {})",
            guard.key_release_events
        );
        Ok(guard)
    }

    /// Whether the terminal reports key releases
    pub fn key_release_events(&self) -> bool {
        self.key_release_events
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.key_release_events {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, DisableFocusChange, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Draws frames to stdout, scaled to the terminal size
#[derive(Debug)]
pub struct TerminalRenderer {
    out: Stdout,
    canvas: Canvas,
    config: Config,
}

impl TerminalRenderer {
    pub fn new(config: &Config) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out: io::stdout(),
            canvas: Canvas::new(cols, rows),
            config: config.clone(),
        })
    }

    fn track_resize(&mut self) -> io::Result<()> {
        let size = terminal::size()?;
        if size != self.canvas.size() {
            log::debug!("Terminal resized to {}x{}", size.0, size.1);
            self.canvas.resize(size.0, size.1);
            queue!(self.out, Clear(ClearType::All))?;
        }
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.track_resize()?;

        let shapes = scene(frame, &self.config);
        let field: Vec2 = self.config.field_size();
        self.canvas.clear();
        self.canvas.rasterize(&shapes, field);

        for (row, line) in self.canvas.lines().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()
    }
}
