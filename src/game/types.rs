//! Core data types: the bird, pipes, the playing field, and difficulty levels.

use crate::constants::{BIRD_START_Y, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No run yet; waiting for the first input.
    Idle,
    /// A run is in progress.
    Running,
    /// The run ended on a collision; final score is available.
    Ended,
}

/// Difficulty levels. Selected between runs; a run captures its level's
/// parameters at start and keeps them until it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Easy,
    Normal,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Normal, Level::Hard];

    /// Look up a level by selection index. Out-of-range indices are
    /// rejected rather than defaulted, so a bad id can never change state.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    /// Multiplier applied to the base gravity constant.
    pub fn gravity_factor(&self) -> f64 {
        match self {
            Self::Easy => 0.4,
            Self::Normal => 0.6,
            Self::Hard => 0.8,
        }
    }

    /// Pipe scroll speed in px per frame. Deliberately frame-coupled,
    /// unlike the bird's delta-time physics.
    pub fn scroll_speed(&self) -> f64 {
        match self {
            Self::Easy => 2.0,
            Self::Normal => 3.0,
            Self::Hard => 4.0,
        }
    }

    /// Vertical opening between a pipe's top and bottom segments (px).
    pub fn gap(&self) -> f64 {
        match self {
            Self::Easy => 160.0,
            Self::Normal => 140.0,
            Self::Hard => 120.0,
        }
    }

    /// Frames between pipe spawns. A pipe spawns on every exact multiple,
    /// including frame 0.
    pub fn spawn_interval(&self) -> u64 {
        match self {
            Self::Easy => 120,
            Self::Normal => 90,
            Self::Hard => 70,
        }
    }
}

/// The controlled bird. Horizontal position is the fixed `BIRD_X` column.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Vertical position of the body center (px, 0 = ceiling, grows down).
    pub y: f64,
    /// Vertical velocity (px/s, positive = falling).
    pub velocity: f64,
    /// Smoothed visual tilt (degrees, positive = nose down). Cosmetic.
    pub tilt: f64,
    /// Run-clock time of the last flap (seconds). Drives the wing
    /// animation only; never consulted by gameplay.
    pub last_flap: Option<f64>,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            velocity: 0.0,
            tilt: 0.0,
            last_flap: None,
        }
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair: a top segment from the ceiling down to `top_height` and a
/// bottom segment from `bottom_y` down to the floor, with the gap between.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge (px). Decreases every frame.
    pub x: f64,
    /// Height of the top segment (px from the ceiling).
    pub top_height: f64,
    /// Where the bottom segment starts. Fixed at creation from the gap of
    /// the level active when the pipe spawned.
    pub bottom_y: f64,
    /// Set once the bird has passed this pipe, so it scores exactly once.
    pub passed: bool,
}

/// Playing-field dimensions in world pixels. Injected by the shell.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub width: f64,
    pub height: f64,
}

impl Field {
    pub fn new(width: f64, height: f64) -> Self {
        // Degenerate sizes would empty the spawn range and pin the bird
        // against both bounds; clamp instead of failing.
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parameters() {
        let l = Level::Easy;
        assert!((l.gravity_factor() - 0.4).abs() < f64::EPSILON);
        assert!((l.scroll_speed() - 2.0).abs() < f64::EPSILON);
        assert!((l.gap() - 160.0).abs() < f64::EPSILON);
        assert_eq!(l.spawn_interval(), 120);

        let l = Level::Hard;
        assert!((l.gravity_factor() - 0.8).abs() < f64::EPSILON);
        assert!((l.scroll_speed() - 4.0).abs() < f64::EPSILON);
        assert!((l.gap() - 120.0).abs() < f64::EPSILON);
        assert_eq!(l.spawn_interval(), 70);
    }

    #[test]
    fn test_level_from_index() {
        assert_eq!(Level::from_index(0), Some(Level::Easy));
        assert_eq!(Level::from_index(1), Some(Level::Normal));
        assert_eq!(Level::from_index(2), Some(Level::Hard));
        assert_eq!(Level::from_index(3), None);
        assert_eq!(Level::from_index(99), None);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(Level::Easy.name(), "Easy");
        assert_eq!(Level::Normal.name(), "Normal");
        assert_eq!(Level::Hard.name(), "Hard");
        assert_eq!(Level::ALL.len(), 3);
    }

    #[test]
    fn test_new_bird_defaults() {
        let bird = Bird::new();
        assert!((bird.y - BIRD_START_Y).abs() < f64::EPSILON);
        assert_eq!(bird.velocity, 0.0);
        assert_eq!(bird.tilt, 0.0);
        assert!(bird.last_flap.is_none());
    }

    #[test]
    fn test_field_clamps_degenerate_sizes() {
        let field = Field::new(-10.0, 0.0);
        assert!(field.width >= 1.0);
        assert!(field.height >= 1.0);

        let field = Field::default();
        assert!((field.width - DEFAULT_FIELD_WIDTH).abs() < f64::EPSILON);
        assert!((field.height - DEFAULT_FIELD_HEIGHT).abs() < f64::EPSILON);
    }
}
