pub mod circle;
pub mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use std::fmt;

use crate::math::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The collision shape carried by a sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    /// A bare position with no extent.
    Point,
}

/// Which collision routines apply to a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Point,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Point => ShapeKind::Point,
        }
    }

    /// Width and height of the shape's bounding box.
    pub fn size(&self) -> Vec2 {
        match self {
            Shape::Circle(c) => Vec2::new(c.diameter(), c.diameter()),
            Shape::Rectangle(r) => Vec2::new(r.width, r.height),
            Shape::Point => Vec2::ZERO,
        }
    }

    pub fn radius(&self) -> Option<f64> {
        match self {
            Shape::Circle(c) => Some(c.radius),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Point => "point",
        };
        f.write_str(name)
    }
}
