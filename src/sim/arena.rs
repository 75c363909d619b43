//! Rectangular arena bounds and wall-bounce
//!
//! The arena spans `[0, width] x [0, height]` in screen space (y down).
//! Both entities and the avatar reflect off its walls with the same rule:
//! flip the axis velocity and nudge one unit back inside so nothing sticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Degenerate arena dimensions
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArenaError {
    #[error("arena width must be finite and positive (got {0})")]
    Width(f32),
    #[error("arena height must be finite and positive (got {0})")]
    Height(f32),
}

/// Immutable play-field bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self, ArenaError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ArenaError::Width(width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ArenaError::Height(height));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Bounce a circle centered at `pos`
    pub fn bounce_circle(&self, pos: &mut Vec2, vel: &mut Vec2, radius: f32) {
        let (low, high) = self.circle_limits(radius);
        bounce(pos, vel, low, high);
    }

    /// Bounce a rectangle whose top-left corner is `pos`
    pub fn bounce_rect(&self, pos: &mut Vec2, vel: &mut Vec2, size: Vec2) {
        let (low, high) = self.rect_limits(size);
        bounce(pos, vel, low, high);
    }

    /// Wall limits for a circle's center
    pub fn circle_limits(&self, radius: f32) -> (Vec2, Vec2) {
        (Vec2::splat(radius), self.size() - Vec2::splat(radius))
    }

    /// Wall limits for a rectangle's top-left corner
    pub fn rect_limits(&self, size: Vec2) -> (Vec2, Vec2) {
        (Vec2::ZERO, self.size() - size)
    }
}

/// Reflect `pos`/`vel` off the walls on both axes independently.
///
/// `low` and `high` are the per-axis limits the tracked point may reach
/// before bouncing.
pub fn bounce(pos: &mut Vec2, vel: &mut Vec2, low: Vec2, high: Vec2) {
    bounce_axis(&mut pos.x, &mut vel.x, low.x, high.x);
    bounce_axis(&mut pos.y, &mut vel.y, low.y, high.y);
}

/// One-axis wall test. The low wall wins when both limits are violated.
#[inline]
fn bounce_axis(pos: &mut f32, vel: &mut f32, low: f32, high: f32) {
    if *pos >= high || *pos <= low {
        *vel = -*vel;
        if *pos <= low {
            *pos += 1.0;
        } else {
            *pos -= 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate() {
        assert_eq!(Arena::new(0.0, 100.0), Err(ArenaError::Width(0.0)));
        assert_eq!(Arena::new(100.0, -1.0), Err(ArenaError::Height(-1.0)));
        assert!(Arena::new(f32::NAN, 100.0).is_err());
        assert!(Arena::new(100.0, f32::INFINITY).is_err());
        assert!(Arena::new(800.0, 600.0).is_ok());
    }

    #[test]
    fn test_bounce_high_wall() {
        let arena = Arena::new(100.0, 100.0).unwrap();
        let mut pos = Vec2::new(95.0, 50.0);
        let mut vel = Vec2::new(3.0, 2.0);
        arena.bounce_circle(&mut pos, &mut vel, 5.0);
        assert_eq!(pos, Vec2::new(94.0, 50.0));
        assert_eq!(vel, Vec2::new(-3.0, 2.0));
    }

    #[test]
    fn test_bounce_low_wall_and_corner() {
        let arena = Arena::new(100.0, 100.0).unwrap();
        let mut pos = Vec2::new(5.0, 4.0);
        let mut vel = Vec2::new(-3.0, -2.0);
        arena.bounce_circle(&mut pos, &mut vel, 5.0);
        // Both axes flip on a corner hit
        assert_eq!(pos, Vec2::new(6.0, 5.0));
        assert_eq!(vel, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_bounce_interior_untouched() {
        let arena = Arena::new(100.0, 100.0).unwrap();
        let mut pos = Vec2::new(50.0, 50.0);
        let mut vel = Vec2::new(3.0, 2.0);
        arena.bounce_circle(&mut pos, &mut vel, 5.0);
        assert_eq!(pos, Vec2::new(50.0, 50.0));
        assert_eq!(vel, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_low_wall_wins_when_too_narrow() {
        // Circle wider than the arena violates both walls at once
        let arena = Arena::new(10.0, 100.0).unwrap();
        let mut pos = Vec2::new(5.0, 50.0);
        let mut vel = Vec2::new(1.0, 0.0);
        arena.bounce_circle(&mut pos, &mut vel, 8.0);
        assert_eq!(pos.x, 6.0);
        assert_eq!(vel.x, -1.0);
    }

    #[test]
    fn test_rect_limits() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let (low, high) = arena.rect_limits(Vec2::new(100.0, 50.0));
        assert_eq!(low, Vec2::ZERO);
        assert_eq!(high, Vec2::new(700.0, 550.0));
    }
}
