//! Axis-aligned collision tests
//!
//! The ball is treated as its bounding square everywhere. Edges that merely
//! touch do not count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test (shared edges are not an overlap)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Ball's bounding square overlaps `rect`
#[inline]
pub fn ball_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius > rect.x
        && center.x - radius < rect.right()
        && center.y + radius > rect.y
        && center.y - radius < rect.bottom()
}

/// Ball pokes past the left or right wall
#[inline]
pub fn ball_hits_side_wall(center: Vec2, radius: f32, field_width: f32) -> bool {
    center.x + radius > field_width || center.x - radius < 0.0
}

/// Ball pokes above the ceiling
#[inline]
pub fn ball_hits_ceiling(center: Vec2, radius: f32) -> bool {
    center.y - radius < 0.0
}

/// Ball dropped below the floor
#[inline]
pub fn ball_hits_floor(center: Vec2, radius: f32, field_height: f32) -> bool {
    center.y + radius > field_height
}
