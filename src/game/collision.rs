//! Collision detection between the bird, the field bounds, and pipes.

use super::types::{Bird, Field, Pipe};
use crate::constants::{BIRD_HEIGHT, BIRD_WIDTH, BIRD_X, PIPE_WIDTH};

/// True if the bird touches the floor or ceiling, or overlaps a pipe
/// segment. The gap between a pipe's segments is always safe, no matter
/// how tight the horizontal overlap.
pub fn check(bird: &Bird, pipes: &[Pipe], field: &Field) -> bool {
    let half_h = BIRD_HEIGHT / 2.0;

    if bird.y + half_h >= field.height {
        return true;
    }
    if bird.y - half_h <= 0.0 {
        return true;
    }

    let left = BIRD_X - BIRD_WIDTH / 2.0;
    let right = BIRD_X + BIRD_WIDTH / 2.0;

    pipes.iter().any(|pipe| {
        right > pipe.x
            && left < pipe.x + PIPE_WIDTH
            && (bird.y - half_h < pipe.top_height || bird.y + half_h > pipe.bottom_y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::new(800.0, 480.0)
    }

    fn bird_at(y: f64) -> Bird {
        Bird {
            y,
            ..Bird::new()
        }
    }

    /// A pipe whose left edge overlaps the bird's column.
    fn overlapping_pipe(top_height: f64, bottom_y: f64) -> Pipe {
        Pipe {
            x: BIRD_X - PIPE_WIDTH / 2.0,
            top_height,
            bottom_y,
            passed: false,
        }
    }

    #[test]
    fn test_floor_collision_regardless_of_pipes() {
        let field = field();
        // Lower bound exactly at the floor
        let bird = bird_at(field.height - BIRD_HEIGHT / 2.0);
        assert!(check(&bird, &[], &field));
        // Pipes present or not makes no difference
        let pipe = overlapping_pipe(50.0, 400.0);
        assert!(check(&bird, &[pipe], &field));
    }

    #[test]
    fn test_ceiling_collision() {
        let bird = bird_at(BIRD_HEIGHT / 2.0);
        assert!(check(&bird, &[], &field()));
    }

    #[test]
    fn test_clear_air_no_collision() {
        let bird = bird_at(240.0);
        assert!(!check(&bird, &[], &field()));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        // Gap spans 200..360; a 30px-tall bird centered at 280 fits fully
        let bird = bird_at(280.0);
        let pipe = overlapping_pipe(200.0, 360.0);
        assert!(!check(&bird, &[pipe], &field()));
    }

    #[test]
    fn test_top_segment_hit() {
        let pipe = overlapping_pipe(200.0, 360.0);
        // Upper edge pokes into the top segment
        let bird = bird_at(210.0);
        assert!(check(&bird, &[pipe], &field()));
    }

    #[test]
    fn test_bottom_segment_hit() {
        let pipe = overlapping_pipe(200.0, 360.0);
        let bird = bird_at(350.0);
        assert!(check(&bird, &[pipe], &field()));
    }

    #[test]
    fn test_no_horizontal_overlap_is_safe() {
        // Pipe well to the right of the bird, bird at pipe height
        let pipe = Pipe {
            x: 400.0,
            top_height: 200.0,
            bottom_y: 360.0,
            passed: false,
        };
        let bird = bird_at(100.0);
        assert!(!check(&bird, &[pipe], &field()));
    }

    #[test]
    fn test_resize_moves_the_floor() {
        let bird = bird_at(460.0);
        assert!(check(&bird, &[], &Field::new(800.0, 480.0)));
        assert!(!check(&bird, &[], &Field::new(800.0, 960.0)));
    }
}
