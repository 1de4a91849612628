use crate::math::Vec2;
use crate::objects::geometry::Geometry;
use crate::shapes::{Circle, Rectangle, Shape, ShapeKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which coordinate space a collision routine reads positions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Space {
    /// Positions relative to each sprite's parent container.
    #[default]
    Local,
    /// Positions in world space (`parent_offset + position`).
    Global,
}

/// A caller-owned collision participant.
///
/// The scene layer keeps `position`, `anchor` and `parent_offset` in sync with
/// whatever it renders. Collision responses only ever write back `position`
/// and `velocity`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sprite {
    pub shape: Shape,
    /// Anchor point in the parent's coordinate space.
    pub position: Vec2,
    pub velocity: Vec2,
    /// Damps bounces. Values that are not finite and positive count as 1.
    pub mass: f64,
    /// Fraction of the bounding box, in `[0, 1]` on each axis, at which
    /// `position` sits. `(0, 0)` is the top-left corner.
    pub anchor: Vec2,
    /// World-space origin of the parent container.
    pub parent_offset: Vec2,
}

impl Sprite {
    /// Creates a sprite at `position` with zero velocity, unit mass and a
    /// top-left anchor.
    pub fn new(shape: Shape, position: Vec2) -> Self {
        Self {
            shape,
            position,
            velocity: Vec2::ZERO,
            mass: 1.0,
            anchor: Vec2::ZERO,
            parent_offset: Vec2::ZERO,
        }
    }

    /// A rectangle whose top-left corner is at `(x, y)`.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            Shape::Rectangle(Rectangle::new(width, height)),
            Vec2::new(x, y),
        )
    }

    /// A circle centred on `(x, y)`. The anchor is placed at the middle of
    /// the bounding box so `position` and centre coincide.
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::new(Shape::Circle(Circle::new(radius)), Vec2::new(x, y))
            .with_anchor(Vec2::new(0.5, 0.5))
    }

    pub fn point(x: f64, y: f64) -> Self {
        Self::new(Shape::Point, Vec2::new(x, y))
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_parent_offset(mut self, parent_offset: Vec2) -> Self {
        self.parent_offset = parent_offset;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Mass used for damping, falling back to 1.
    pub fn effective_mass(&self) -> f64 {
        if self.mass.is_finite() && self.mass > 0.0 {
            self.mass
        } else {
            1.0
        }
    }

    /// Current derived geometry in the requested space.
    pub fn geometry(&self, space: Space) -> Geometry {
        let origin = match space {
            Space::Local => self.position,
            Space::Global => self.parent_offset + self.position,
        };
        Geometry::new(origin, self.shape.size(), self.anchor, self.shape.radius())
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != Vec2::ZERO
    }
}
