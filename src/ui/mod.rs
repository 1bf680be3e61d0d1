//! Terminal rendering. Scene functions consume a [`Session`] snapshot
//! and own no game state of their own.

pub mod common;
pub mod scene;

use crate::game::Session;
use ratatui::Frame;

/// Draw the full frame for the current session state.
pub fn draw(frame: &mut Frame, session: &Session) {
    scene::render_game(frame, frame.size(), session);
}
