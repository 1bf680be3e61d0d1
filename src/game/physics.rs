//! Bird physics: gravity integration, velocity clamping, tilt smoothing.
//!
//! Vertical motion integrates real elapsed time, so the feel is identical
//! across frame rates. The flap impulse is the only discontinuous change
//! to velocity.

use super::types::Bird;
use crate::constants::{
    BASE_GRAVITY, FLAP_IMPULSE, MAX_TILT_DEGREES, MAX_UPWARD_VELOCITY, TERMINAL_VELOCITY,
    TILT_SMOOTHING_RATE,
};

/// Advance the bird by `dt` seconds (dt > 0) under the run's gravity factor.
///
/// After this returns, velocity is always within
/// [`MAX_UPWARD_VELOCITY`, `TERMINAL_VELOCITY`].
pub fn step(bird: &mut Bird, gravity_factor: f64, dt: f64) {
    bird.velocity += BASE_GRAVITY * gravity_factor * dt;
    bird.velocity = bird.velocity.clamp(MAX_UPWARD_VELOCITY, TERMINAL_VELOCITY);
    bird.y += bird.velocity * dt;

    // Ease the visual tilt toward a velocity-derived target. The lerp
    // factor scales with dt, so smoothing is frame-rate independent.
    let target = (bird.velocity / TERMINAL_VELOCITY * MAX_TILT_DEGREES)
        .clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES);
    let lerp = (TILT_SMOOTHING_RATE * dt).min(1.0);
    bird.tilt += (target - bird.tilt) * lerp;
}

/// Apply a flap: velocity snaps to the fixed impulse regardless of its
/// current value. `now` is the run clock in seconds, recorded only for
/// the wing animation.
pub fn flap(bird: &mut Bird, now: f64) {
    bird.velocity = FLAP_IMPULSE;
    bird.last_flap = Some(now);
}
