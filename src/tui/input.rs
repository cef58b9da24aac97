//! Keyboard input handling for the terminal window.
//!
//! Printable keys edit the session's input buffer, Enter submits it, and
//! Esc or Ctrl+C leave the terminal the same way clicking outside the
//! window would.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::InputResult;
use crate::shell::Session;

/// Handle any input event.
pub fn handle_event(event: Event, session: &mut Session) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, session),
        // Resize is picked up by the next draw
        _ => InputResult::Continue,
    }
}

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, session: &mut Session) -> InputResult {
    // Windows terminals also report key releases
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputResult::Quit
        }
        KeyCode::Esc => InputResult::Quit,
        KeyCode::Enter => {
            session.submit_input();
            InputResult::Continue
        }
        KeyCode::Backspace => {
            session.backspace();
            InputResult::Continue
        }
        KeyCode::Char(c) => {
            session.push_char(c);
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
