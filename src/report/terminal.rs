//! Terminal management
//!
//! Handles crossterm backend initialization, alternate-screen setup, and
//! restoration for the full-screen dashboard renderer.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Terminal wrapper that manages the crossterm backend and screen state.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl Tui {
    /// Create a new TUI instance with a crossterm backend.
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Initialize the terminal: raw mode, alternate screen, hidden cursor.
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal to its original state. Safe to call twice.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw a frame using the provided render function.
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Block until any key is pressed.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(_) = event::read()? {
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure the terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}
