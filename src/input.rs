//! Key dispatch for the game screen.
//!
//! Maps terminal key events onto session calls. The session itself
//! enforces when each call is allowed (flap restarts after a crash,
//! level selection is locked during a run), so the mapping stays dumb.

use crate::game::Session;
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep the loop going.
    Continue,
    /// Player asked to leave.
    Quit,
}

/// Dispatch a key event against the session.
pub fn handle_key(key: KeyEvent, session: &mut Session) -> InputResult {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
            session.flap();
            InputResult::Continue
        }
        KeyCode::Char(c @ '1'..='9') => {
            // Level hotkeys are 1-based; the session rejects ids past the
            // level table.
            session.select_level(c as usize - '1' as usize);
            InputResult::Continue
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputResult::Quit,
        _ => InputResult::Continue,
    }
}
