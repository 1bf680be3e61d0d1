//! Skyward - a terminal flappy-bird game.
//!
//! The `game` module is the simulation core: delta-time bird physics,
//! frame-coupled pipe scrolling, collision, scoring, and the
//! Idle/Running/Ended session state machine. It never touches the
//! terminal. The `ui` and `input` modules plus the binary's event loop
//! form the shell around it.

pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
