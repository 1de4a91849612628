//! Collision responses: separate overlapping sprites and optionally bounce
//! them. Only `position` and `velocity` are ever written.

use tracing::{debug, trace};

use crate::collision::bounce::{apply_bounce, Surface};
use crate::collision::hit_test::box_overlap;
use crate::collision::outcome::{Region, Side};
use crate::collision::region::classify_region;
use crate::common::CollisionSettings;
use crate::math::Vec2;
use crate::objects::{Space, Sprite};

/// Used when two centres coincide and the direction between them is undefined.
const FALLBACK_NORMAL: Vec2 = Vec2::DOWN;

/// Unit vector along `between`, or the fallback normal for a zero vector.
fn collision_direction(between: Vec2) -> Vec2 {
    between.try_normalize().unwrap_or_else(|| {
        debug!(?between, "coincident centres, separating along fallback normal");
        FALLBACK_NORMAL
    })
}

/// Mutable references to two distinct sprites of a slice. `i` must be less than `j`.
fn pair_mut(sprites: &mut [Sprite], i: usize, j: usize) -> (&mut Sprite, &mut Sprite) {
    debug_assert!(i < j, "pair indices must be ordered");
    let (head, tail) = sprites.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Pushes `c1` out of a stationary `c2`, optionally bouncing it.
///
/// `c1` is moved along the line between the centres by the overlap plus
/// [`CollisionSettings::quantum_padding`]. With `bounce`, its velocity is
/// reflected off the tangent surface between the two circles and damped by
/// its mass. Returns whether the circles were overlapping.
pub fn circle_collision(
    c1: &mut Sprite,
    c2: &Sprite,
    bounce: bool,
    space: Space,
    settings: &CollisionSettings,
) -> bool {
    let (center_1, radius_1) = c1.geometry(space).as_circle(settings.point_radius);
    let (center_2, radius_2) = c2.geometry(space).as_circle(settings.point_radius);

    let between = center_2 - center_1;
    let distance = between.magnitude();
    let combined_radii = radius_1 + radius_2;

    if !(distance < combined_radii) {
        return false;
    }

    let direction = collision_direction(between);
    let overlap = combined_radii - distance + settings.quantum_padding;
    c1.position -= direction * overlap;

    if bounce {
        apply_bounce(c1, &Surface::from_unit(direction.left_normal()));
    }

    trace!(overlap, bounce, "circle separated");
    true
}

/// Bounces a circle off a single point, treating the point as a circle of
/// [`CollisionSettings::point_radius`].
pub fn circle_point_collision(
    circle: &mut Sprite,
    point: Vec2,
    bounce: bool,
    space: Space,
    settings: &CollisionSettings,
) -> bool {
    let target = Sprite::point(point.x, point.y);
    circle_collision(circle, &target, bounce, space, settings)
}

/// Resolves two moving circles against each other.
///
/// The overlap (plus padding) is split evenly between the circles, and their
/// velocities are exchanged as in an elastic collision: each velocity is
/// split into a part along the collision axis and a part along its normal,
/// the along-axis parts are swapped, and each result is divided by the
/// circle's own mass. Both circles always react.
pub fn moving_circle_collision(
    c1: &mut Sprite,
    c2: &mut Sprite,
    space: Space,
    settings: &CollisionSettings,
) -> bool {
    let (center_1, radius_1) = c1.geometry(space).as_circle(settings.point_radius);
    let (center_2, radius_2) = c2.geometry(space).as_circle(settings.point_radius);

    let between = center_2 - center_1;
    let distance = between.magnitude();
    let combined_radii = radius_1 + radius_2;

    if !(distance < combined_radii) {
        return false;
    }

    let direction = collision_direction(between);
    let overlap = combined_radii - distance + settings.quantum_padding;

    // Each circle takes half the push, away from the other one.
    let half = (direction * (overlap / 2.0)).abs();
    let x_side = if center_1.x > center_2.x { 1.0 } else { -1.0 };
    let y_side = if center_1.y > center_2.y { 1.0 } else { -1.0 };
    let push = Vec2::new(half.x * x_side, half.y * y_side);
    c1.position += push;
    c2.position -= push;

    let normal = direction.left_normal();
    let v1_along = c1.velocity.project_onto(direction);
    let v1_across = c1.velocity.project_onto(normal);
    let v2_along = c2.velocity.project_onto(direction);
    let v2_across = c2.velocity.project_onto(normal);

    c1.velocity = (v1_across + v2_along) / c1.effective_mass();
    c2.velocity = (v1_along + v2_across) / c2.effective_mass();

    trace!(overlap, "moving circles exchanged velocity");
    true
}

/// Runs [`moving_circle_collision`] over every unordered pair in `circles`.
/// Returns how many pairs collided.
pub fn multiple_circle_collision(
    circles: &mut [Sprite],
    space: Space,
    settings: &CollisionSettings,
) -> usize {
    let mut hits = 0;
    for i in 0..circles.len() {
        for j in (i + 1)..circles.len() {
            let (c1, c2) = pair_mut(circles, i, j);
            if moving_circle_collision(c1, c2, space, settings) {
                hits += 1;
            }
        }
    }
    hits
}

/// Pushes `r1` out of `r2` along the axis of least penetration.
///
/// When the horizontal overlap is at least the vertical overlap the boxes
/// are separated vertically and a bounce flips `vy`; otherwise they are
/// separated horizontally and a bounce flips `vx`. The returned side is the
/// side of `r1` that touched `r2`. Any sprite works here through its
/// bounding box.
pub fn rectangle_collision(
    r1: &mut Sprite,
    r2: &Sprite,
    bounce: bool,
    space: Space,
) -> Option<Side> {
    let overlap = box_overlap(&r1.geometry(space), &r2.geometry(space))?;

    let side = if overlap.depth.x >= overlap.depth.y {
        let side = if overlap.delta.y > 0.0 {
            r1.position.y += overlap.depth.y;
            Side::Top
        } else {
            r1.position.y -= overlap.depth.y;
            Side::Bottom
        };
        if bounce {
            r1.velocity.y = -r1.velocity.y;
        }
        side
    } else {
        let side = if overlap.delta.x > 0.0 {
            r1.position.x += overlap.depth.x;
            Side::Left
        } else {
            r1.position.x -= overlap.depth.x;
            Side::Right
        };
        if bounce {
            r1.velocity.x = -r1.velocity.x;
        }
        side
    };

    trace!(?side, depth = ?overlap.depth, bounce, "rectangle separated");
    Some(side)
}

/// Pushes a circle out of a rectangle, bouncing off a flat edge or a corner
/// depending on where the circle's centre is. Returns the region on hit.
pub fn circle_rectangle_collision(
    circle: &mut Sprite,
    rect: &Sprite,
    bounce: bool,
    space: Space,
    settings: &CollisionSettings,
) -> Option<Region> {
    let rect_geom = rect.geometry(space);
    let region = classify_region(circle.geometry(space).center, &rect_geom, settings.corner_bias);

    let hit = match region.corner_point(&rect_geom) {
        Some(corner) => circle_point_collision(circle, corner, bounce, space, settings),
        None => rectangle_collision(circle, rect, bounce, space).is_some(),
    };

    hit.then_some(region)
}
