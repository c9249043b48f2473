//! Axis-aligned collision detection
//!
//! Everything on screen is an upright rectangle, so the run/die decision is a
//! plain AABB overlap between the player and each obstacle.

use glam::Vec2;

/// An axis-aligned rectangle in view coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: size.x,
            h: size.y,
        }
    }

    /// Overlap test on closed intervals: rectangles that merely touch along
    /// an edge already count as contact.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x > other.x + other.w
            || self.x + self.w < other.x
            || self.y > other.y + other.h
            || self.y + self.h < other.y)
    }
}
