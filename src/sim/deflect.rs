//! Collision response: new direction and speed for each kind of hit

use glam::Vec2;

use super::geom::{Aabb, reflect};
use super::paddle::Side;
use crate::config::Config;
use crate::{normalize_angle_deg, polar_to_cartesian};

/// Direction and speed after a deflection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deflection {
    pub dir: Vec2,
    pub speed: f32,
}

/// Contact offset from the paddle's vertical centre, -1 (top) to 1 (bottom)
pub fn relative_offset(ball: &Aabb, pad: &Aabb) -> f32 {
    let rel = 2.0 * (ball.centery() - pad.centery()) as f32 / (pad.height + ball.height) as f32;
    rel.clamp(-1.0, 1.0)
}

/// Outgoing angle in degrees for a face hit. Left paddle sends the ball
/// rightward (around 0°), right paddle leftward (around 180°); in both cases
/// a hit below centre sends the ball down.
pub fn face_angle_deg(side: Side, rel: f32, max_angle_deg: f32) -> f32 {
    match side {
        Side::Left => max_angle_deg * rel,
        Side::Right => normalize_angle_deg(180.0 - max_angle_deg * rel),
    }
}

/// Face hit: centre hits are slow and flat, edge hits fast and steep
pub fn long_side(side: Side, ball: &Aabb, pad: &Aabb, config: &Config) -> Deflection {
    let rel = relative_offset(ball, pad);
    let angle = face_angle_deg(side, rel, config.max_angle_deg);
    Deflection {
        dir: polar_to_cartesian(1.0, angle),
        speed: config.min_speed + (config.max_speed - config.min_speed) * rel.abs(),
    }
}

/// Cap hit: straight back the way it came, at super speed
pub fn end(dir: Vec2, config: &Config) -> Deflection {
    Deflection {
        dir: -dir,
        speed: config.super_speed(),
    }
}

/// Playfield top/bottom: flip the vertical component only
#[inline]
pub fn boundary(dir: Vec2) -> Vec2 {
    reflect(dir, Vec2::Y)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_centre_hit_on_right_pad_goes_straight_left_slowly() {
        let config = Config::default();
        let ball = Aabb::new(450, 195, 10, 10);
        assert_eq!(relative_offset(&ball, &RIGHT_PAD), 0.0);

        let d = long_side(Side::Right, &ball, &RIGHT_PAD, &config);
        assert_eq!(d.speed, config.min_speed);
        assert!((d.dir.x + 1.0).abs() < 1e-6);
        assert!(d.dir.y.abs() < 1e-6);
    }

    #[test]
    fn test_centre_hit_on_left_pad_goes_straight_right() {
        let config = Config::default();
        let ball = Aabb::new(40, 195, 10, 10);
        let d = long_side(Side::Left, &ball, &LEFT_PAD, &config);
        assert_eq!(d.speed, config.min_speed);
        assert_eq!(d.dir, Vec2::X);
    }

    #[test]
    fn test_edge_hits_approach_max_speed_and_angle() {
        let config = Config::default();
        // Lowest ball position that still overlaps the pad face
        let ball = Aabb::new(450, 237, 10, 10);
        let rel = relative_offset(&ball, &RIGHT_PAD);
        assert!(rel > 0.95);

        let d = long_side(Side::Right, &ball, &RIGHT_PAD, &config);
        assert!(d.speed > 9.7 && d.speed <= config.max_speed);
        // Leftward and downward, close to 60° off horizontal
        assert!(d.dir.x < 0.0 && d.dir.y > 0.0);
        let off_horizontal = d.dir.y.atan2(-d.dir.x).to_degrees();
        assert!((off_horizontal - 60.0).abs() < 3.0);

        // Top edge of the left pad deflects upward
        let ball = Aabb::new(40, 154, 10, 10);
        let d = long_side(Side::Left, &ball, &LEFT_PAD, &config);
        assert!(d.dir.x > 0.0 && d.dir.y < 0.0);
        assert!(d.speed > 9.5);
    }

    #[test]
    fn test_relative_offset_is_clamped() {
        let far_below = Aabb::new(450, 600, 10, 10);
        assert_eq!(relative_offset(&far_below, &RIGHT_PAD), 1.0);
        let far_above = Aabb::new(450, -600, 10, 10);
        assert_eq!(relative_offset(&far_above, &RIGHT_PAD), -1.0);
    }

    #[test]
    fn test_face_angle_mirrors_between_sides() {
        assert_eq!(face_angle_deg(Side::Left, 0.5, 60.0), 30.0);
        assert_eq!(face_angle_deg(Side::Right, 0.5, 60.0), 150.0);
        assert_eq!(face_angle_deg(Side::Right, -1.0, 60.0), -120.0);
    }

    #[test]
    fn test_end_hit_reverses_and_supercharges() {
        let config = Config::default();
        let dir = Vec2::new(0.6, 0.8);
        let d = end(dir, &config);
        assert_eq!(d.dir, Vec2::new(-0.6, -0.8));
        assert_eq!(d.speed, config.super_speed());
    }

    #[test]
    fn test_boundary_flips_vertical_only() {
        let d = boundary(Vec2::new(0.6, -0.8));
        assert!((d.x - 0.6).abs() < 1e-6);
        assert!((d.y - 0.8).abs() < 1e-6);
    }
}
