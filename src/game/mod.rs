//! Game core: physics, pipes, collision, and the session state machine.
//!
//! Everything in this module is terminal-agnostic. Field dimensions are
//! injected through [`Session::resize`], and randomness comes in through
//! `rand::Rng` parameters, so the whole core runs under test without a
//! rendering surface.

pub mod collision;
pub mod physics;
pub mod pipes;
pub mod session;
pub mod types;

pub use session::Session;
pub use types::{Bird, Field, Level, Phase, Pipe};
