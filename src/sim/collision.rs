//! Collision predicates for axis-aligned boxes and circles
//!
//! Everything in the runner is either a box (player, obstacles) or a circle
//! (coins), so two overlap tests cover all gameplay contacts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// Separating-axis test for two boxes.
///
/// Boxes that only share an edge are not overlapping.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Check whether a circle touches a box.
///
/// Works on distances from the circle center to the box center: outside the
/// expanded box is a miss, inside either slab is a hit, and the remaining
/// corner regions compare against the radius. All comparisons are inclusive.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let half = rect.half_extents();
    let dist = (center - rect.center()).abs();

    if dist.x > half.x + radius {
        return false;
    }
    if dist.y > half.y + radius {
        return false;
    }
    if dist.x <= half.x {
        return true;
    }
    if dist.y <= half.y {
        return true;
    }

    let corner = dist - half;
    corner.length_squared() <= radius * radius
}
