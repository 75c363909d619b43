//! Collision detection between the avatar and spawned circles
//!
//! The avatar is tested as an axis-aligned rectangle shrunk around its
//! center, so grazing the sprite's transparent corners does not count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by center and half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsetRect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl InsetRect {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Circle-vs-rectangle overlap, touching counts as a hit
    pub fn touches_circle(&self, circle_center: Vec2, radius: f32) -> bool {
        circle_rect_overlap(circle_center, radius, self.center, self.half_extents)
    }
}

/// Check whether a circle overlaps an axis-aligned rectangle.
///
/// Works on the absolute per-axis distance between the centers:
/// 1. Farther than `half + radius` on either axis: clear miss.
/// 2. Within `half` on either axis: the center projects into the rect's
///    slab, so it is a hit.
/// 3. Otherwise the circle is off a corner; hit iff the corner lies within
///    `radius`.
pub fn circle_rect_overlap(circle_center: Vec2, radius: f32, rect_center: Vec2, half: Vec2) -> bool {
    let dist = (circle_center - rect_center).abs();

    if dist.x > half.x + radius || dist.y > half.y + radius {
        return false;
    }
    if dist.x <= half.x || dist.y <= half.y {
        return true;
    }

    let corner = dist - half;
    corner.length_squared() <= radius * radius
}
