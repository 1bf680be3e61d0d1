//! Integration tests: full runs driven through the session's public API,
//! the way the terminal shell drives it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyward::constants::{BIRD_START_Y, FLAP_IMPULSE};
use skyward::game::{Level, Phase, Session};

const DT: f64 = 1.0 / 60.0;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(1337)
}

/// Scripted pilot: flap whenever the bird is falling below the hover
/// band. Keeps the bird oscillating around mid-field, far from the floor
/// and ceiling, which is all the early game (before any pipe reaches the
/// bird's column) requires.
fn hover(session: &mut Session) {
    if session.bird().velocity > 0.0 && session.bird().y >= 300.0 {
        session.flap();
    }
}

/// Run frames with the hover pilot until the run ends or `frames` have
/// elapsed. Panics if the pilot crashes; these tests rely on surviving.
fn fly(session: &mut Session, rng: &mut ChaCha8Rng, frames: u64) {
    for _ in 0..frames {
        hover(session);
        session.advance_frame(DT, rng);
        assert!(
            session.is_running(),
            "hover pilot crashed at frame {}",
            session.frame_count()
        );
    }
}

/// Run frames without any input until the run ends (free fall into the
/// floor). Panics if it somehow survives the frame budget.
fn fall_until_crash(session: &mut Session, rng: &mut ChaCha8Rng) {
    for _ in 0..600 {
        session.advance_frame(DT, rng);
        if !session.is_running() {
            return;
        }
    }
    panic!("free fall never hit the floor");
}

#[test]
fn test_pipe_spawn_cadence_on_easy() {
    let mut session = Session::new();
    let mut rng = test_rng();
    session.start();

    // Frame 0 spawns the opening pipe
    fly(&mut session, &mut rng, 1);
    assert_eq!(session.pipes().len(), 1);

    // Nothing else spawns until frame 120
    fly(&mut session, &mut rng, 119);
    assert_eq!(session.pipes().len(), 1);

    fly(&mut session, &mut rng, 1);
    assert_eq!(session.pipes().len(), 2);
}

#[test]
fn test_physics_matches_reference_numbers() {
    let mut session = Session::new();
    session.start();
    session.advance_frame(DT, &mut test_rng());

    // Easy: gravity factor 0.4 -> one 60 FPS step from rest gives
    // v = 2400 * 0.4 / 60 = 16 px/s and y = 150 + 16/60 ≈ 150.2667
    assert!((session.bird().velocity - 16.0).abs() < 1e-9);
    assert!((session.bird().y - 150.266_666_7).abs() < 1e-6);
}

#[test]
fn test_level_selection_locked_during_run() {
    let mut session = Session::new();
    let mut rng = test_rng();
    session.start();
    fly(&mut session, &mut rng, 1);

    assert!(!session.select_level(2));
    assert_eq!(session.level(), Level::Easy);

    // Pipes spawned after the rejected switch still carry the Easy gap
    fly(&mut session, &mut rng, 120);
    for pipe in session.pipes() {
        assert!((pipe.bottom_y - pipe.top_height - Level::Easy.gap()).abs() < f64::EPSILON);
    }
}

#[test]
fn test_crash_restart_cycle() {
    let mut session = Session::new();
    let mut rng = test_rng();

    // First input starts the run and flaps
    session.flap();
    assert!(session.is_running());
    fly(&mut session, &mut rng, 10);

    fall_until_crash(&mut session, &mut rng);
    assert_eq!(session.phase(), Phase::Ended);
    assert_eq!(session.final_score(), Some(0));

    // The loop is frozen: late frame calls change nothing
    let frames = session.frame_count();
    session.advance_frame(DT, &mut rng);
    assert_eq!(session.frame_count(), frames);

    // Flap on the game-over screen starts a fresh run
    session.flap();
    assert!(session.is_running());
    assert_eq!(session.score(), 0);
    assert!(session.final_score().is_none());
    assert!(session.pipes().is_empty());
    assert_eq!(session.frame_count(), 0);
    assert!((session.bird().y - BIRD_START_Y).abs() < f64::EPSILON);
    assert!((session.bird().velocity - FLAP_IMPULSE).abs() < f64::EPSILON);
}

#[test]
fn test_new_level_applies_after_crash() {
    let mut session = Session::new();
    let mut rng = test_rng();
    session.start();
    fall_until_crash(&mut session, &mut rng);

    assert!(session.select_level(2));
    session.flap();
    assert_eq!(session.level_label(), "Hard");

    session.advance_frame(DT, &mut rng);
    let pipe = &session.pipes()[0];
    assert!((pipe.bottom_y - pipe.top_height - Level::Hard.gap()).abs() < f64::EPSILON);
}

#[test]
fn test_resize_feeds_generation() {
    let mut session = Session::new();
    session.resize(1600.0, 960.0);
    session.start();
    session.advance_frame(DT, &mut test_rng());

    // Spawned at the new right edge, then moved one frame of Easy speed
    let pipe = &session.pipes()[0];
    assert!((pipe.x - (1600.0 - Level::Easy.scroll_speed())).abs() < 1e-9);
}

#[test]
fn test_final_score_visible_only_after_crash() {
    let mut session = Session::new();
    let mut rng = test_rng();
    assert!(session.final_score().is_none());

    session.start();
    fly(&mut session, &mut rng, 5);
    assert!(session.final_score().is_none());

    fall_until_crash(&mut session, &mut rng);
    assert_eq!(session.final_score(), Some(session.score()));
}
