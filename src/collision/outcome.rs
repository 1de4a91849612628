use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::Vec2;
use crate::objects::Geometry;

/// Which side of the moving rectangle touched the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Where a circle's centre lies relative to a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TopLeft,
    TopMiddle,
    TopRight,
    LeftMiddle,
    Inside,
    RightMiddle,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Region {
    /// The rectangle corner nearest to a corner region, `None` for flat regions.
    pub fn corner_point(self, rect: &Geometry) -> Option<Vec2> {
        match self {
            Region::TopLeft => Some(Vec2::new(rect.left(), rect.top())),
            Region::TopRight => Some(Vec2::new(rect.right(), rect.top())),
            Region::BottomLeft => Some(Vec2::new(rect.left(), rect.bottom())),
            Region::BottomRight => Some(Vec2::new(rect.right(), rect.bottom())),
            _ => None,
        }
    }
}

/// What a successful hit test or response reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// The shapes overlap; no further detail.
    Hit,
    /// Rectangle response: the side of the first rectangle that was hit.
    Side(Side),
    /// Circle-vs-rectangle: the region the circle was in.
    Region(Region),
}

impl From<Side> for Collision {
    fn from(side: Side) -> Self {
        Collision::Side(side)
    }
}

impl From<Region> for Collision {
    fn from(region: Region) -> Self {
        Collision::Region(region)
    }
}

bitflags! {
    /// Boundary sides crossed in one containment check. A corner violation
    /// sets two flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct BoundarySides: u8 {
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

impl From<Side> for BoundarySides {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => BoundarySides::TOP,
            Side::Right => BoundarySides::RIGHT,
            Side::Bottom => BoundarySides::BOTTOM,
            Side::Left => BoundarySides::LEFT,
        }
    }
}

impl BoundarySides {
    pub fn has(self, side: Side) -> bool {
        self.contains(BoundarySides::from(side))
    }

    /// `None` for the empty set.
    pub(crate) fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_corner_point() {
        let rect = Geometry::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0), Vec2::ZERO, None);
        assert_eq!(Region::TopLeft.corner_point(&rect), Some(Vec2::new(10.0, 20.0)));
        assert_eq!(Region::TopRight.corner_point(&rect), Some(Vec2::new(14.0, 20.0)));
        assert_eq!(Region::BottomLeft.corner_point(&rect), Some(Vec2::new(10.0, 22.0)));
        assert_eq!(Region::BottomRight.corner_point(&rect), Some(Vec2::new(14.0, 22.0)));
        assert_eq!(Region::TopMiddle.corner_point(&rect), None);
        assert_eq!(Region::Inside.corner_point(&rect), None);
    }

    #[test]
    fn test_boundary_sides_set() {
        let sides = BoundarySides::LEFT | BoundarySides::TOP;
        assert!(sides.has(Side::Left));
        assert!(sides.has(Side::Top));
        assert!(!sides.has(Side::Right));
        assert_eq!(BoundarySides::empty().non_empty(), None);
        assert_eq!(sides.non_empty(), Some(sides));
    }
}
