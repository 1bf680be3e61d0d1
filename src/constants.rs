//! Tuning constants for the simulation and the terminal shell.
//!
//! The simulation runs in virtual pixels: gravity in px/s², velocities in
//! px/s, pipe scroll in px/frame. The shell converts terminal cells to
//! world pixels when it forwards resize events.

// Physics constants
pub const BASE_GRAVITY: f64 = 2400.0; // px/s^2, scaled by the level's gravity factor
pub const FLAP_IMPULSE: f64 = -360.0; // px/s, set directly on flap (negative = upward)
pub const TERMINAL_VELOCITY: f64 = 700.0; // max downward speed (px/s)
pub const MAX_UPWARD_VELOCITY: f64 = -500.0; // max upward speed (px/s)

// Tilt animation
pub const MAX_TILT_DEGREES: f64 = 45.0;
pub const TILT_SMOOTHING_RATE: f64 = 8.0; // per second, lerp factor is min(1, rate * dt)

// Wing-flap visual (no gameplay effect)
pub const FLAP_ANIM_SECONDS: f64 = 0.15;

// Bird geometry (bounding box; the drawn body is a circle of BIRD_WIDTH/2)
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const BIRD_X: f64 = 50.0; // fixed column, pipes scroll past it
pub const BIRD_START_Y: f64 = 150.0;

// Pipes
pub const PIPE_WIDTH: f64 = 60.0;
pub const MIN_TOP_HEIGHT: f64 = 50.0; // shortest possible top segment

// Field defaults, used until the shell reports the real terminal size
pub const DEFAULT_FIELD_WIDTH: f64 = 800.0;
pub const DEFAULT_FIELD_HEIGHT: f64 = 480.0;

// Frame timing
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS target cadence
pub const MIN_FRAME_SECONDS: f64 = 0.001; // clock-anomaly guard, dt is clamped up to this

// Terminal cell to world pixel mapping (cells are roughly twice as tall as wide)
pub const PX_PER_COL: f64 = 10.0;
pub const PX_PER_ROW: f64 = 20.0;
