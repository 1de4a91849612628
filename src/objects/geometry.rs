//! Derived sprite geometry.
//!
//! Everything here is computed from a sprite's current fields on each call,
//! so it can never go stale when the sprite moves or resizes.

use crate::math::Vec2;

/// Snapshot of a sprite's bounding box in one coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// The anchor point the sprite is positioned by.
    pub position: Vec2,
    pub size: Vec2,
    /// Pixel distance from the bounding box's top-left corner to `position`.
    pub anchor_offset: Vec2,
    pub top_left: Vec2,
    pub center: Vec2,
    pub half_extents: Vec2,
    /// Set for circles only.
    pub radius: Option<f64>,
}

impl Geometry {
    pub fn new(position: Vec2, size: Vec2, anchor: Vec2, radius: Option<f64>) -> Self {
        let anchor_offset = Vec2::new(size.x * anchor.x, size.y * anchor.y);
        let top_left = position - anchor_offset;
        let half_extents = size.abs() * 0.5;
        Self {
            position,
            size,
            anchor_offset,
            top_left,
            center: top_left + half_extents,
            half_extents,
            radius,
        }
    }

    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    pub fn right(&self) -> f64 {
        self.top_left.x + self.half_extents.x * 2.0
    }

    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    pub fn bottom(&self) -> f64 {
        self.top_left.y + self.half_extents.y * 2.0
    }

    /// Centre and radius when the shape is treated as a circle. Points (no
    /// extent, no radius) use `point_radius`; rectangles use half their width.
    pub fn as_circle(&self, point_radius: f64) -> (Vec2, f64) {
        match self.radius {
            Some(r) => (self.center, r),
            None if self.half_extents == Vec2::ZERO => (self.center, point_radius),
            None => (self.center, self.half_extents.x),
        }
    }
}
