//! Axis-aligned bodies for every on-screen entity
//!
//! Positions are box centers in screen space (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A moving axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position
    pub pos: Vec2,
    /// Half width / half height
    pub half_extents: Vec2,
    /// Velocity applied by `move_speed` (pixels/tick)
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            half_extents: size / 2.0,
            vel: Vec2::ZERO,
        }
    }

    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::splat(size))
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.half_extents
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Overlap on each axis (negative when separated on that axis)
    fn overlap(&self, other: &Body) -> Vec2 {
        let reach = self.half_extents + other.half_extents;
        reach - (self.pos - other.pos).abs()
    }

    /// Whether the two boxes overlap. Boxes sharing an edge count as touching,
    /// so a player resting exactly on the ground stays grounded.
    pub fn touches(&self, other: &Body) -> bool {
        let overlap = self.overlap(other);
        overlap.x >= 0.0 && overlap.y >= 0.0
    }

    /// Push this body out of `other` along the axis of least penetration
    pub fn move_to_stop_overlapping(&mut self, other: &Body) {
        let overlap = self.overlap(other);
        if overlap.x <= 0.0 || overlap.y <= 0.0 {
            return;
        }
        if overlap.y <= overlap.x {
            let dir = if self.pos.y < other.pos.y { -1.0 } else { 1.0 };
            self.pos.y += dir * overlap.y;
        } else {
            let dir = if self.pos.x < other.pos.x { -1.0 } else { 1.0 };
            self.pos.x += dir * overlap.x;
        }
    }

    /// Integrate velocity for one tick
    #[inline]
    pub fn move_speed(&mut self) {
        self.pos += self.vel;
    }

    /// Scale the box around its center
    pub fn scale_by(&mut self, factor: f32) {
        self.half_extents *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_is_inclusive() {
        let a = Body::square(0.0, 0.0, 10.0);
        let b = Body::square(10.0, 0.0, 10.0);
        assert!(a.touches(&b));
        let c = Body::square(10.5, 0.0, 10.0);
        assert!(!a.touches(&c));
    }

    #[test]
    fn test_stop_overlapping_pushes_up_out_of_ground() {
        let ground = Body::new(Vec2::new(300.0, 750.0), Vec2::new(600.0, 100.0));
        let mut player = Body::square(300.0, 675.0, 64.0);
        assert!(player.touches(&ground));
        player.move_to_stop_overlapping(&ground);
        assert_eq!(player.max().y, ground.min().y);
        assert_eq!(player.pos.x, 300.0);
        // Resting on the edge still counts as touching
        assert!(player.touches(&ground));
    }

    #[test]
    fn test_stop_overlapping_uses_shallow_axis() {
        let wall = Body::square(0.0, 0.0, 100.0);
        let mut b = Body::square(52.0, 10.0, 10.0);
        b.move_to_stop_overlapping(&wall);
        assert_eq!(b.pos, Vec2::new(55.0, 10.0));
    }

    #[test]
    fn test_move_speed_and_scale() {
        let mut b = Body::square(0.0, 0.0, 64.0);
        b.vel.y = -10.0;
        b.move_speed();
        assert_eq!(b.pos.y, -10.0);
        b.scale_by(0.5);
        assert_eq!(b.size(), Vec2::splat(32.0));
    }
}
