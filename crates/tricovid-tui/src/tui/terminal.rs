//! Terminal setup and teardown.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame};

/// Raw-mode alternate screen, restored on drop and on panic.
pub struct Terminal {
    terminal: ratatui::Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

impl Terminal {
    /// Switches to the alternate screen in raw mode.
    pub fn enter() -> Result<Self> {
        let terminal = ratatui::Terminal::new(CrosstermBackend::new(io::stdout()))?;

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            original_hook(panic_info);
        }));

        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Leaves the alternate screen; later calls are no-ops.
    pub fn exit(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            restore()?;
            self.terminal.show_cursor()?;
        }
        Ok(())
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}
