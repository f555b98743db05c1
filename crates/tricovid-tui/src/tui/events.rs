//! Keyboard input for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;

/// Polls the terminal for key presses between redraws.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits up to one tick for a key press.
    ///
    /// Release and repeat events, mouse and resize events all yield `None`;
    /// the next redraw picks up a resize on its own.
    pub fn next_key(&self) -> Option<KeyEvent> {
        if !event::poll(self.tick_rate).ok()? {
            return None;
        }
        match event::read().ok()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

/// Applies a key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) => app.show_help = false,
            KeyCode::Char('c') if ctrl => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char('r') if ctrl => app.refresh_regions(),
        KeyCode::F(5) => app.refresh_regions(),
        KeyCode::F(1) => app.show_help = true,
        KeyCode::Char(c) if !ctrl => app.push_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down | KeyCode::Tab => app.move_down(),
        KeyCode::Enter => app.select_highlighted(),
        KeyCode::Esc => {
            if app.query.is_empty() {
                app.should_quit = true;
            } else {
                app.clear_query();
            }
        }
        _ => {}
    }
}
