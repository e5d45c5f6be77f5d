//! Collision classification for the ball against paddles and playfield
//!
//! The ball moves in whole-pixel steps that can exceed a paddle's width at
//! high speed, so every contact test accepts a band around the touched edge
//! sized to half of this tick's travel along the relevant axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use super::paddle::Side;

/// Playfield edge involved in a boundary hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
}

/// What the ball ran into this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Collision {
    #[default]
    None,
    /// Flat face of a paddle (the side facing the opponent)
    LongSide(Side),
    /// Top or bottom cap of a paddle
    End(Side),
    /// Top or bottom of the playfield
    Boundary(Edge),
    /// Past a side of the playfield by more than the grace margin
    OutOfBounds,
}

/// Ball kinematics needed by the detector
#[derive(Debug, Clone, Copy)]
pub struct BallProbe {
    pub aabb: Aabb,
    pub dir: Vec2,
    pub speed: f32,
}

/// Half of this tick's horizontal travel, rounded up
#[inline]
pub fn long_side_tolerance(speed: f32, dir: Vec2) -> i32 {
    (speed * dir.x * dir.x / 2.0).ceil() as i32
}

/// Half of this tick's vertical travel, rounded up, never below one pixel
#[inline]
pub fn end_tolerance(speed: f32, dir: Vec2) -> i32 {
    ((speed * dir.y * dir.y / 2.0).ceil() as i32).max(1)
}

/// True once the ball is further outside the playfield than it travels in
/// `grace_ticks` ticks at its current speed
pub fn is_out_of_bounds(ball: &Aabb, speed: f32, playfield: &Aabb, grace_ticks: u32) -> bool {
    let grace = speed * grace_ticks as f32;
    (ball.right() as f32) < playfield.left as f32 - grace
        || (ball.left as f32) > playfield.right() as f32 + grace
}

/// Ball's leading edge within the tolerance band of the paddle's facing edge,
/// moving toward it, with vertical overlap
pub fn check_long_side(probe: &BallProbe, pad: &Aabb, side: Side) -> bool {
    let tolerance = long_side_tolerance(probe.speed, probe.dir);
    let gap = match side {
        Side::Right if probe.dir.x > 0.0 => probe.aabb.right() - pad.left,
        Side::Left if probe.dir.x < 0.0 => probe.aabb.left - pad.right(),
        _ => return false,
    };
    gap.abs() <= tolerance && probe.aabb.overlaps_vertically(pad)
}

/// Ball horizontally aligned with the paddle and its leading vertical edge
/// within the tolerance band of the cap it is heading for
pub fn check_end(probe: &BallProbe, pad: &Aabb) -> bool {
    let ball = &probe.aabb;
    if 2 * (pad.centerx() - ball.centerx()).abs() >= pad.width + ball.width {
        return false;
    }

    let tolerance = end_tolerance(probe.speed, probe.dir);
    let near_top = (ball.bottom() - pad.top).abs() <= tolerance;
    let near_bottom = (ball.top - pad.bottom()).abs() <= tolerance;

    if probe.dir.y > 0.0 {
        near_top
    } else if probe.dir.y < 0.0 {
        near_bottom
    } else {
        near_top || near_bottom
    }
}

/// Paddle contact, right paddle first. Face hits take priority over cap hits.
pub fn check_paddles(probe: &BallProbe, left: &Aabb, right: &Aabb) -> Option<Collision> {
    let pads = [(Side::Right, right), (Side::Left, left)];

    if let Some((side, _)) = pads
        .iter()
        .find(|(side, pad)| check_long_side(probe, pad, *side))
    {
        return Some(Collision::LongSide(*side));
    }

    pads.iter()
        .find(|(_, pad)| check_end(probe, pad))
        .map(|(side, _)| Collision::End(*side))
}

/// Ball past the top or bottom of the playfield and still heading outward
pub fn check_boundary(probe: &BallProbe, playfield: &Aabb) -> Option<Edge> {
    if probe.aabb.top < playfield.top && probe.dir.y < 0.0 {
        Some(Edge::Top)
    } else if probe.aabb.bottom() > playfield.bottom() && probe.dir.y > 0.0 {
        Some(Edge::Bottom)
    } else {
        None
    }
}

/// Classify this tick's interaction. Each stage short-circuits the next:
/// out of bounds, then paddles, then playfield boundary.
pub fn detect(
    probe: &BallProbe,
    left: &Aabb,
    right: &Aabb,
    playfield: &Aabb,
    grace_ticks: u32,
) -> Collision {
    if is_out_of_bounds(&probe.aabb, probe.speed, playfield, grace_ticks) {
        return Collision::OutOfBounds;
    }
    if let Some(hit) = check_paddles(probe, left, right) {
        return hit;
    }
    check_boundary(probe, playfield)
        .map(Collision::Boundary)
        .unwrap_or(Collision::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: Aabb = Aabb {
        left: 0,
        top: 0,
        width: 500,
        height: 400,
    };
    const LEFT_PAD: Aabb = Aabb {
        left: 30,
        top: 163,
        width: 10,
        height: 75,
    };
    const RIGHT_PAD: Aabb = Aabb {
        left: 460,
        top: 163,
        width: 10,
        height: 75,
    };

    fn probe(left: i32, top: i32, dir: Vec2, speed: f32) -> BallProbe {
        BallProbe {
            aabb: Aabb::new(left, top, 10, 10),
            dir,
            speed,
        }
    }

    #[test]
    fn test_tolerances() {
        assert_eq!(long_side_tolerance(8.0, Vec2::X), 4);
        assert_eq!(long_side_tolerance(5.0, Vec2::X), 3);
        assert_eq!(long_side_tolerance(5.0, Vec2::Y), 0);
        assert_eq!(end_tolerance(5.0, Vec2::X), 1);
        assert_eq!(end_tolerance(12.0, Vec2::Y), 6);
    }

    #[test]
    fn test_right_face_hit_at_contact() {
        // Right edge touching the pad's left edge, centred vertically
        let p = probe(450, 195, Vec2::X, 8.0);
        assert_eq!(
            detect(&p, &LEFT_PAD, &RIGHT_PAD, &FIELD, 60),
            Collision::LongSide(Side::Right)
        );
    }

    #[test]
    fn test_face_hit_within_band_on_either_side() {
        // speed 8 → band of ±4 px
        assert!(check_long_side(&probe(446, 195, Vec2::X, 8.0), &RIGHT_PAD, Side::Right));
        assert!(check_long_side(&probe(454, 195, Vec2::X, 8.0), &RIGHT_PAD, Side::Right));
        assert!(!check_long_side(&probe(445, 195, Vec2::X, 8.0), &RIGHT_PAD, Side::Right));
        assert!(!check_long_side(&probe(455, 195, Vec2::X, 8.0), &RIGHT_PAD, Side::Right));
    }

    #[test]
    fn test_left_face_hit() {
        let p = probe(41, 190, Vec2::NEG_X, 5.0);
        assert_eq!(
            check_paddles(&p, &LEFT_PAD, &RIGHT_PAD),
            Some(Collision::LongSide(Side::Left))
        );
    }

    #[test]
    fn test_face_ignored_when_moving_away() {
        let p = probe(450, 195, Vec2::NEG_X, 8.0);
        assert!(!check_long_side(&p, &RIGHT_PAD, Side::Right));
        assert_eq!(check_paddles(&p, &LEFT_PAD, &RIGHT_PAD), None);
    }

    #[test]
    fn test_face_requires_vertical_overlap() {
        // Ball bottom touches the pad top exactly: no face overlap
        let p = probe(450, 153, Vec2::X, 8.0);
        assert!(!check_long_side(&p, &RIGHT_PAD, Side::Right));
        let p = probe(450, 154, Vec2::X, 8.0);
        assert!(check_long_side(&p, &RIGHT_PAD, Side::Right));
    }

    #[test]
    fn test_end_hit_on_top_cap_moving_down() {
        // Centred over the pad, bottom edge on the pad's top edge
        let dir = Vec2::new(0.6, 0.8);
        let p = probe(460, 153, dir, 10.0);
        assert_eq!(
            check_paddles(&p, &LEFT_PAD, &RIGHT_PAD),
            Some(Collision::End(Side::Right))
        );
        // Same spot moving up is not heading for the top cap
        let p = probe(460, 153, Vec2::new(0.6, -0.8), 10.0);
        assert_eq!(check_paddles(&p, &LEFT_PAD, &RIGHT_PAD), None);
    }

    #[test]
    fn test_end_hit_on_bottom_cap_moving_up() {
        let p = probe(30, 238, Vec2::new(-0.6, -0.8), 5.0);
        assert_eq!(
            check_paddles(&p, &LEFT_PAD, &RIGHT_PAD),
            Some(Collision::End(Side::Left))
        );
    }

    #[test]
    fn test_end_hit_with_zero_vertical_component_uses_one_pixel_band() {
        let p = probe(35, 152, Vec2::X, 5.0);
        assert!(check_end(&p, &LEFT_PAD));
        let p = probe(35, 151, Vec2::X, 5.0);
        assert!(!check_end(&p, &LEFT_PAD));
    }

    #[test]
    fn test_end_hit_requires_horizontal_alignment() {
        // Centres 10 px apart: (10 + 10) / 2 is not strictly greater
        let p = probe(40, 153, Vec2::Y, 5.0);
        assert!(!check_end(&p, &LEFT_PAD));
        let p = probe(39, 153, Vec2::Y, 5.0);
        assert!(check_end(&p, &LEFT_PAD));
    }

    #[test]
    fn test_boundary_hits() {
        let p = probe(200, -1, Vec2::new(0.6, -0.8), 5.0);
        assert_eq!(
            detect(&p, &LEFT_PAD, &RIGHT_PAD, &FIELD, 60),
            Collision::Boundary(Edge::Top)
        );
        let p = probe(200, 391, Vec2::new(0.6, 0.8), 5.0);
        assert_eq!(
            detect(&p, &LEFT_PAD, &RIGHT_PAD, &FIELD, 60),
            Collision::Boundary(Edge::Bottom)
        );
        // Already heading back in
        let p = probe(200, -1, Vec2::new(0.6, 0.8), 5.0);
        assert_eq!(detect(&p, &LEFT_PAD, &RIGHT_PAD, &FIELD, 60), Collision::None);
    }

    #[test]
    fn test_out_of_bounds_grace() {
        // speed 5 * 60 ticks = 300 px of grace
        let inside_grace = Aabb::new(-309, 195, 10, 10);
        assert!(!is_out_of_bounds(&inside_grace, 5.0, &FIELD, 60));
        let past_grace = Aabb::new(-311, 195, 10, 10);
        assert!(is_out_of_bounds(&past_grace, 5.0, &FIELD, 60));

        let right_past = Aabb::new(801, 195, 10, 10);
        assert!(is_out_of_bounds(&right_past, 5.0, &FIELD, 60));
        let right_inside = Aabb::new(800, 195, 10, 10);
        assert!(!is_out_of_bounds(&right_inside, 5.0, &FIELD, 60));
    }

    #[test]
    fn test_out_of_bounds_short_circuits_everything() {
        let p = probe(-400, -50, Vec2::new(-0.6, -0.8), 5.0);
        assert_eq!(
            detect(&p, &LEFT_PAD, &RIGHT_PAD, &FIELD, 60),
            Collision::OutOfBounds
        );
    }

    #[test]
    fn test_paddle_hit_beats_boundary() {
        // Overlapping the bottom of the field and a face hit on a low paddle
        let low_pad = Aabb::new(460, 325, 10, 75);
        let p = probe(450, 391, Vec2::new(0.8, 0.6), 10.0);
        assert_eq!(
            detect(&p, &LEFT_PAD, &low_pad, &FIELD, 60),
            Collision::LongSide(Side::Right)
        );
    }
}
