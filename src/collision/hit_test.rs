//! Boolean and region hit tests. Nothing in here mutates a sprite.

use crate::collision::outcome::Region;
use crate::collision::region::classify_region;
use crate::common::CollisionSettings;
use crate::math::Vec2;
use crate::objects::{Geometry, Space, Sprite};
use crate::shapes::Shape;

/// Overlap between two bounding boxes that intersect on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BoxOverlap {
    /// Centre of the first box minus centre of the second.
    pub delta: Vec2,
    /// Penetration depth on each axis, always positive.
    pub depth: Vec2,
}

/// Separating-axis test on the two boxes' half extents. Touching edges do
/// not count.
pub(crate) fn box_overlap(a: &Geometry, b: &Geometry) -> Option<BoxOverlap> {
    let delta = a.center - b.center;
    let combined = a.half_extents + b.half_extents;

    if delta.x.abs() < combined.x && delta.y.abs() < combined.y {
        Some(BoxOverlap {
            delta,
            depth: combined - delta.abs(),
        })
    } else {
        None
    }
}

/// Is `point` strictly inside `shape`?
///
/// Rectangles exclude their edges and circles exclude their circumference. A
/// point shape has no area and is never hit.
pub fn hit_test_point(point: Vec2, shape: &Sprite, space: Space) -> bool {
    let g = shape.geometry(space);
    match shape.shape {
        Shape::Rectangle(_) => {
            point.x > g.left() && point.x < g.right() && point.y > g.top() && point.y < g.bottom()
        }
        Shape::Circle(circle) => point.distance(g.center) < circle.radius,
        Shape::Point => false,
    }
}

/// Are two circles overlapping? Tangent circles are not.
pub fn hit_test_circle(c1: &Sprite, c2: &Sprite, space: Space) -> bool {
    let (center_1, radius_1) = c1.geometry(space).as_circle(0.0);
    let (center_2, radius_2) = c2.geometry(space).as_circle(0.0);
    center_1.distance(center_2) < radius_1 + radius_2
}

/// Is `point` strictly inside the circle?
pub fn hit_test_circle_point(circle: &Sprite, point: Vec2, space: Space) -> bool {
    let (center, radius) = circle.geometry(space).as_circle(0.0);
    center.distance(point) < radius
}

/// Do two sprites' bounding boxes overlap?
pub fn hit_test_rectangle(r1: &Sprite, r2: &Sprite, space: Space) -> bool {
    box_overlap(&r1.geometry(space), &r2.geometry(space)).is_some()
}

/// Circle vs rectangle, returning the circle's region when they touch.
///
/// Flat regions use the circle's bounding box against the rectangle; corner
/// regions test the circle against the nearest corner, taken as a circle of
/// [`CollisionSettings::point_radius`] just like the corner response.
pub fn hit_test_circle_rectangle(
    circle: &Sprite,
    rect: &Sprite,
    space: Space,
    settings: &CollisionSettings,
) -> Option<Region> {
    let circle_geom = circle.geometry(space);
    let rect_geom = rect.geometry(space);
    let region = classify_region(circle_geom.center, &rect_geom, settings.corner_bias);

    let hit = match region.corner_point(&rect_geom) {
        Some(corner) => {
            let (center, radius) = circle_geom.as_circle(settings.point_radius);
            center.distance(corner) < radius + settings.point_radius
        }
        None => box_overlap(&circle_geom, &rect_geom).is_some(),
    };

    hit.then_some(region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_point_rectangle_excludes_edges() {
        let rect = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        assert!(hit_test_point(Vec2::new(5.0, 5.0), &rect, Space::Local));
        assert!(!hit_test_point(Vec2::new(0.0, 5.0), &rect, Space::Local));
        assert!(!hit_test_point(Vec2::new(5.0, 10.0), &rect, Space::Local));
        assert!(!hit_test_point(Vec2::new(11.0, 5.0), &rect, Space::Local));
    }

    #[test]
    fn test_hit_test_point_respects_anchor() {
        let rect = Sprite::rectangle(0.0, 0.0, 10.0, 10.0).with_anchor(Vec2::new(0.5, 0.5));
        assert!(hit_test_point(Vec2::new(-4.0, -4.0), &rect, Space::Local));
        assert!(!hit_test_point(Vec2::new(6.0, 6.0), &rect, Space::Local));
    }

    #[test]
    fn test_hit_test_point_circle() {
        let circle = Sprite::circle(0.0, 0.0, 5.0);
        assert!(hit_test_point(Vec2::new(1.0, 1.0), &circle, Space::Local));
        assert!(!hit_test_point(Vec2::new(3.0, 4.0), &circle, Space::Local));
    }

    #[test]
    fn test_hit_test_point_global_space() {
        let rect = Sprite::rectangle(0.0, 0.0, 10.0, 10.0).with_parent_offset(Vec2::new(100.0, 0.0));
        assert!(!hit_test_point(Vec2::new(105.0, 5.0), &rect, Space::Local));
        assert!(hit_test_point(Vec2::new(105.0, 5.0), &rect, Space::Global));
    }

    #[test]
    fn test_hit_test_circle_strict_at_tangency() {
        let a = Sprite::circle(0.0, 0.0, 2.0);
        let touching = Sprite::circle(5.0, 0.0, 3.0);
        let overlapping = Sprite::circle(4.99, 0.0, 3.0);
        assert!(!hit_test_circle(&a, &touching, Space::Local));
        assert!(hit_test_circle(&a, &overlapping, Space::Local));
    }

    #[test]
    fn test_hit_test_circle_point_boundary_excluded() {
        let circle = Sprite::circle(0.0, 0.0, 5.0);
        assert!(!hit_test_circle_point(&circle, Vec2::new(3.0, 4.0), Space::Local));
        assert!(hit_test_circle_point(&circle, Vec2::new(3.0, 3.9), Space::Local));
    }

    #[test]
    fn test_hit_test_rectangle_overlap() {
        let a = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        let b = Sprite::rectangle(5.0, 5.0, 10.0, 10.0);
        assert!(hit_test_rectangle(&a, &b, Space::Local));
    }

    #[test]
    fn test_hit_test_rectangle_touching_edges_miss() {
        let a = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        let b = Sprite::rectangle(10.0, 0.0, 10.0, 10.0);
        assert!(!hit_test_rectangle(&a, &b, Space::Local));
    }

    #[test]
    fn test_hit_test_rectangle_is_symmetric() {
        let rects = [
            Sprite::rectangle(0.0, 0.0, 10.0, 10.0),
            Sprite::rectangle(5.0, 5.0, 10.0, 10.0),
            Sprite::rectangle(10.0, 0.0, 3.0, 3.0),
            Sprite::rectangle(-20.0, 2.0, 25.0, 1.0),
            Sprite::rectangle(3.0, -8.0, 1.0, 30.0),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(
                    hit_test_rectangle(a, b, Space::Local),
                    hit_test_rectangle(b, a, Space::Local)
                );
            }
        }
    }

    #[test]
    fn test_hit_test_circle_rectangle_flat_edge() {
        let settings = CollisionSettings::default();
        let rect = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        let circle = Sprite::circle(5.0, -1.0, 2.0);
        assert_eq!(
            hit_test_circle_rectangle(&circle, &rect, Space::Local, &settings),
            Some(Region::TopMiddle)
        );

        let clear = Sprite::circle(5.0, -3.0, 2.0);
        assert_eq!(hit_test_circle_rectangle(&clear, &rect, Space::Local, &settings), None);
    }

    #[test]
    fn test_hit_test_circle_rectangle_corner() {
        let settings = CollisionSettings::default();
        let rect = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        // Centre 2 px diagonally from the top-left corner, radius covers it.
        let near = Sprite::circle(-2.0, -2.0, 3.0);
        assert_eq!(
            hit_test_circle_rectangle(&near, &rect, Space::Local, &settings),
            Some(Region::TopLeft)
        );
        // Bounding boxes touch but the corner is out of reach.
        let far = Sprite::circle(-2.0, -2.0, 2.0);
        assert_eq!(hit_test_circle_rectangle(&far, &rect, Space::Local, &settings), None);
    }

    #[test]
    fn test_hit_test_circle_rectangle_corner_counts_point_radius() {
        let settings = CollisionSettings::default();
        let rect = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        // Corner is 4.24 away: beyond the radius, within radius + point radius.
        let ball = Sprite::circle(-3.0, -3.0, 4.0);
        assert!(!hit_test_circle_point(&ball, Vec2::ZERO, Space::Local));
        assert_eq!(
            hit_test_circle_rectangle(&ball, &rect, Space::Local, &settings),
            Some(Region::TopLeft)
        );

        let strict = CollisionSettings::new(0.3, 1.0, 0.0);
        assert_eq!(hit_test_circle_rectangle(&ball, &rect, Space::Local, &strict), None);
    }

    #[test]
    fn test_hit_test_circle_global_space() {
        let a = Sprite::circle(0.0, 0.0, 2.0).with_parent_offset(Vec2::new(100.0, 0.0));
        let b = Sprite::circle(103.0, 0.0, 2.0);
        assert!(!hit_test_circle(&a, &b, Space::Local));
        assert!(hit_test_circle(&a, &b, Space::Global));
    }

    #[test]
    fn test_hit_test_circle_rectangle_corner_global_space() {
        let settings = CollisionSettings::default();
        let rect = Sprite::rectangle(0.0, 0.0, 10.0, 10.0).with_parent_offset(Vec2::new(50.0, 50.0));
        let ball = Sprite::circle(-3.0, -3.0, 4.0).with_parent_offset(Vec2::new(50.0, 50.0));
        assert_eq!(
            hit_test_circle_rectangle(&ball, &rect, Space::Global, &settings),
            Some(Region::TopLeft)
        );

        // Only the rectangle is offset: the ball sits far from it in world space.
        let home = Sprite::circle(-3.0, -3.0, 4.0);
        assert_eq!(hit_test_circle_rectangle(&home, &rect, Space::Global, &settings), None);
        assert_eq!(
            hit_test_circle_rectangle(&home, &rect, Space::Local, &settings),
            Some(Region::TopLeft)
        );
    }

    #[test]
    fn test_hit_test_circle_rectangle_inside() {
        let settings = CollisionSettings::default();
        let rect = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        let circle = Sprite::circle(5.0, 5.0, 1.0);
        assert_eq!(
            hit_test_circle_rectangle(&circle, &rect, Space::Local, &settings),
            Some(Region::Inside)
        );
    }
}
