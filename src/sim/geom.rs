//! Pixel rectangles and direction-vector helpers
//!
//! Screen coordinates: +x right, +y down. Rectangles are whole pixels;
//! directions are `glam::Vec2` with speed kept as a separate scalar.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Reflect about a surface normal: the component along the normal is negated
#[inline]
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    v - 2.0 * v.dot(normal) * normal
}

/// Axis-aligned bounding box in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Aabb {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Aabb {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of the given size whose centre is at (cx, cy)
    pub fn from_center(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Self::new(cx - width / 2, cy - height / 2, width, height)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    #[inline]
    pub fn centerx(&self) -> i32 {
        self.left + self.width / 2
    }

    #[inline]
    pub fn centery(&self) -> i32 {
        self.top + self.height / 2
    }

    #[inline]
    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.left, self.top)
    }

    /// Same size, moved by (dx, dy)
    #[inline]
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            left: self.left + delta.x,
            top: self.top + delta.y,
            ..*self
        }
    }

    /// Same size, top-left corner placed at `pos`
    #[inline]
    pub fn with_top_left(&self, pos: IVec2) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            ..*self
        }
    }

    /// Open-interval vertical overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_vertically(&self, other: &Aabb) -> bool {
        self.bottom() > other.top && self.top < other.bottom()
    }
}
