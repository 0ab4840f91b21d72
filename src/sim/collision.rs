//! Collision response math
//!
//! Overlap itself is a plain AABB test (`Rect::overlaps`); this module decides
//! what the ball's velocity becomes afterwards.

use glam::Vec2;

use super::geometry::Rect;

/// Velocity component to invert after a brick hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Rescale a velocity to the given speed, keeping its direction
///
/// A zero vector has no direction and comes back unchanged.
#[inline]
pub fn renormalize(velocity: Vec2, speed: f32) -> Vec2 {
    velocity.normalize_or_zero() * speed
}

/// New ball velocity after striking the paddle
///
/// The hit position across the paddle (-1 at the left edge, 1 at the right)
/// scales the outgoing angle up to `max_deflection` radians from vertical.
/// The ball always leaves upward and keeps its speed.
pub fn paddle_deflection(
    ball_x: f32,
    velocity: Vec2,
    paddle: &Rect,
    speed: f32,
    max_deflection: f32,
) -> Vec2 {
    let half_width = paddle.width() / 2.0;
    let hit_pos = (ball_x - paddle.center().x) / half_width;
    let angle = hit_pos * max_deflection;

    let deflected = Vec2::new(angle.sin() * speed, -velocity.y.abs());
    renormalize(deflected, speed)
}

/// Pick which velocity component to flip after overlapping a brick
///
/// Compares the distance between ball centre and brick centre on each axis.
/// Vertical wins ties.
pub fn brick_reflection_axis(ball_center: Vec2, brick: &Rect) -> Axis {
    let dist = (ball_center - brick.center()).abs();
    if dist.x > dist.y {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: f32 = 5.0;
    const MAX: f32 = std::f32::consts::FRAC_PI_3;

    fn paddle() -> Rect {
        Rect::new(340.0, 570.0, 120.0, 15.0)
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let vel = paddle_deflection(400.0, Vec2::new(2.0, 4.0), &paddle(), SPEED, MAX);
        assert!(vel.x.abs() < 1e-5);
        assert!((vel.y + SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_edge_hits_angle_outward() {
        let left = paddle_deflection(345.0, Vec2::new(0.0, 5.0), &paddle(), SPEED, MAX);
        let right = paddle_deflection(455.0, Vec2::new(0.0, 5.0), &paddle(), SPEED, MAX);
        assert!(left.x < 0.0);
        assert!(right.x > 0.0);
        assert!(left.y < 0.0 && right.y < 0.0);
        assert!((left.length() - SPEED).abs() < 1e-4);
        assert!((right.length() - SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_brick_axis_prefers_vertical_on_tie() {
        let brick = Rect::new(0.0, 0.0, 20.0, 20.0);
        // Exactly on the diagonal from the centre
        assert_eq!(brick_reflection_axis(Vec2::new(15.0, 15.0), &brick), Axis::Vertical);
        assert_eq!(brick_reflection_axis(Vec2::new(25.0, 12.0), &brick), Axis::Horizontal);
        assert_eq!(brick_reflection_axis(Vec2::new(12.0, 25.0), &brick), Axis::Vertical);
    }

    #[test]
    fn test_renormalize() {
        let v = renormalize(Vec2::new(3.0, 4.0), 10.0);
        assert!((v - Vec2::new(6.0, 8.0)).length() < 1e-5);
        assert_eq!(renormalize(Vec2::ZERO, 10.0), Vec2::ZERO);
    }
}
