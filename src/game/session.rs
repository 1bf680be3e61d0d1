//! The session: run lifecycle and per-frame orchestration.
//!
//! A [`Session`] owns every piece of mutable game state (bird, pipes,
//! score, frame counter, field) and moves through Idle, Running, Ended.
//! The shell drives it with `flap`, `select_level`, `resize`, and one
//! `advance_frame` call per display frame; everything else is read-only
//! observation.

use super::types::{Bird, Field, Level, Phase, Pipe};
use super::{collision, physics, pipes};
use crate::constants::MIN_FRAME_SECONDS;
use rand::Rng;

/// Difficulty parameters captured when a run starts. Level selection
/// between runs can never alter a run already in flight.
#[derive(Debug, Clone, Copy)]
struct RunParams {
    level: Level,
    gravity_factor: f64,
    scroll_speed: f64,
    gap: f64,
    spawn_interval: u64,
}

impl RunParams {
    fn capture(level: Level) -> Self {
        Self {
            level,
            gravity_factor: level.gravity_factor(),
            scroll_speed: level.scroll_speed(),
            gap: level.gap(),
            spawn_interval: level.spawn_interval(),
        }
    }
}

/// All game state for one terminal session.
pub struct Session {
    phase: Phase,
    /// Level used by the next `start`. Mutable only while Idle/Ended.
    pending_level: Level,
    /// Parameters of the active (or most recent) run.
    run: RunParams,
    bird: Bird,
    pipes: Vec<Pipe>,
    score: u32,
    frame_count: u64,
    /// Run time in seconds, accumulated from frame deltas. Resets on start.
    clock: f64,
    field: Field,
}

impl Session {
    pub fn new() -> Self {
        let pending_level = Level::Easy;
        Self {
            phase: Phase::Idle,
            pending_level,
            run: RunParams::capture(pending_level),
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            frame_count: 0,
            clock: 0.0,
            field: Field::default(),
        }
    }

    /// Begin a run: every piece of run state is reset and the pending
    /// level's parameters are captured. Valid from any phase.
    pub fn start(&mut self) {
        self.run = RunParams::capture(self.pending_level);
        self.bird = Bird::new();
        self.pipes = Vec::new();
        self.score = 0;
        self.frame_count = 0;
        self.clock = 0.0;
        self.phase = Phase::Running;
    }

    /// Flap input. Starts a run first if none is active, so the first
    /// input of a session (or the first after a crash) both starts and
    /// flaps.
    pub fn flap(&mut self) {
        if self.phase != Phase::Running {
            self.start();
        }
        physics::flap(&mut self.bird, self.clock);
    }

    /// Choose the level for the next run. Rejected while Running and for
    /// out-of-range indices; returns whether the selection was accepted.
    pub fn select_level(&mut self, index: usize) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        match Level::from_index(index) {
            Some(level) => {
                self.pending_level = level;
                true
            }
            None => false,
        }
    }

    /// Update the field dimensions (world px). Takes effect from the next
    /// frame: spawn heights use the new height, collision the new floor.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.field = Field::new(width, height);
    }

    /// Advance the simulation by one frame of `dt` seconds. A no-op
    /// unless Running: once a collision ends the run, no further frame
    /// work can happen until an explicit restart.
    ///
    /// Scoring must see pipes at their freshly moved positions and
    /// collision must see the fully updated frame, so the order here
    /// (physics, spawn, evict, move/score, collide) matters.
    pub fn advance_frame<R: Rng>(&mut self, dt: f64, rng: &mut R) {
        if self.phase != Phase::Running {
            return;
        }

        // Clock anomalies (dt <= 0) must not poison position/velocity.
        let dt = dt.max(MIN_FRAME_SECONDS);
        self.clock += dt;

        physics::step(&mut self.bird, self.run.gravity_factor, dt);

        pipes::spawn_due(
            &mut self.pipes,
            self.frame_count,
            self.run.spawn_interval,
            self.run.gap,
            &self.field,
            rng,
        );
        pipes::evict(&mut self.pipes);
        self.score += pipes::advance_and_score(&mut self.pipes, self.run.scroll_speed);

        if collision::check(&self.bird, &self.pipes, &self.field) {
            self.phase = Phase::Ended;
            return;
        }

        self.frame_count += 1;
    }

    // Observable state for the shell and renderer

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The finished run's score. Only meaningful once Ended.
    pub fn final_score(&self) -> Option<u32> {
        match self.phase {
            Phase::Ended => Some(self.score),
            _ => None,
        }
    }

    /// The level the next run will use (equals the active level while
    /// Running, since selection is locked then).
    pub fn level(&self) -> Level {
        self.pending_level
    }

    /// Label of the level governing the current or most recent run.
    pub fn level_label(&self) -> &'static str {
        self.run.level.name()
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Seconds since the last flap, for the wing animation. None before
    /// the first flap of a run.
    pub fn time_since_flap(&self) -> Option<f64> {
        self.bird.last_flap.map(|at| self.clock - at)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
