//! Pipe lifecycle: spawning, scrolling, scoring, and eviction.
//!
//! Spawning and movement are counted in frames, not seconds: pipe speed
//! is px/frame. That matches the level table's tuning and is kept
//! deliberately alongside the delta-time bird physics.

use super::types::{Field, Pipe};
use crate::constants::{BIRD_X, MIN_TOP_HEIGHT, PIPE_WIDTH};
use rand::Rng;

/// Spawn a pipe if `frame_count` is an exact multiple of the spawn
/// interval (frame 0 included, so every run opens with a pipe on its way).
///
/// The top segment height is drawn uniformly from
/// [`MIN_TOP_HEIGHT`, field.height / 2 + `MIN_TOP_HEIGHT`), and the gap is
/// baked into `bottom_y` at creation time.
pub fn spawn_due<R: Rng>(
    pipes: &mut Vec<Pipe>,
    frame_count: u64,
    spawn_interval: u64,
    gap: f64,
    field: &Field,
    rng: &mut R,
) {
    if frame_count % spawn_interval != 0 {
        return;
    }

    let top_height = rng.gen_range(MIN_TOP_HEIGHT..field.height / 2.0 + MIN_TOP_HEIGHT);
    pipes.push(Pipe {
        x: field.width,
        top_height,
        bottom_y: top_height + gap,
        passed: false,
    });
}

/// Drop every pipe whose trailing edge has scrolled fully past the field
/// origin. The only removal path; relative order is preserved.
pub fn evict(pipes: &mut Vec<Pipe>) {
    pipes.retain(|pipe| pipe.x + PIPE_WIDTH >= 0.0);
}

/// Scroll all pipes left by `speed` px and mark newly passed pipes.
/// Returns how many pipes were passed this frame; each pipe can score at
/// most once, ever.
pub fn advance_and_score(pipes: &mut [Pipe], speed: f64) -> u32 {
    let mut scored = 0;
    for pipe in pipes.iter_mut() {
        pipe.x -= speed;
        if !pipe.passed && pipe.x + PIPE_WIDTH < BIRD_X {
            pipe.passed = true;
            scored += 1;
        }
    }
    scored
}
