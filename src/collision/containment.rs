//! Keeping sprites inside a play area, and detecting sprites that left it.
//!
//! `bounds` are given in world space. A sprite's box is measured in world
//! space too (`parent_offset + position`, anchor-corrected), and any
//! correction is written back to its local `position`.

use tracing::trace;

use crate::collision::bounds::Bounds;
use crate::collision::outcome::BoundarySides;
use crate::objects::{Space, Sprite};

/// Clamps `sprite` inside `bounds`. See [`contain_with`].
pub fn contain(sprite: &mut Sprite, bounds: &Bounds, bounce: bool) -> Option<BoundarySides> {
    contain_with(sprite, bounds, bounce, |_| {})
}

/// Clamps `sprite` inside `bounds`, reporting every side it crossed.
///
/// Sides are checked independently in the order left, top, right, bottom. A
/// crossed side moves the sprite back flush with that edge, negates the
/// matching velocity component when `bounce` is set, and divides that
/// component by the sprite's mass either way. `on_hit` only runs when at
/// least one side was crossed.
pub fn contain_with<F>(
    sprite: &mut Sprite,
    bounds: &Bounds,
    bounce: bool,
    mut on_hit: F,
) -> Option<BoundarySides>
where
    F: FnMut(BoundarySides),
{
    let mass = sprite.effective_mass();
    let mut sides = BoundarySides::empty();

    let g = sprite.geometry(Space::Global);
    if g.left() < bounds.left() {
        sprite.position.x += bounds.left() - g.left();
        sprite.velocity.x = damp(sprite.velocity.x, bounce, mass);
        sides |= BoundarySides::LEFT;
    }

    let g = sprite.geometry(Space::Global);
    if g.top() < bounds.top() {
        sprite.position.y += bounds.top() - g.top();
        sprite.velocity.y = damp(sprite.velocity.y, bounce, mass);
        sides |= BoundarySides::TOP;
    }

    let g = sprite.geometry(Space::Global);
    if g.right() > bounds.right() {
        sprite.position.x -= g.right() - bounds.right();
        sprite.velocity.x = damp(sprite.velocity.x, bounce, mass);
        sides |= BoundarySides::RIGHT;
    }

    let g = sprite.geometry(Space::Global);
    if g.bottom() > bounds.bottom() {
        sprite.position.y -= g.bottom() - bounds.bottom();
        sprite.velocity.y = damp(sprite.velocity.y, bounce, mass);
        sides |= BoundarySides::BOTTOM;
    }

    let sides = sides.non_empty()?;
    trace!(?sides, bounce, "sprite contained");
    on_hit(sides);
    Some(sides)
}

fn damp(component: f64, bounce: bool, mass: f64) -> f64 {
    let component = if bounce { -component } else { component };
    component / mass
}

/// Reports the sides of `bounds` that `sprite` lies entirely beyond. Never
/// mutates the sprite.
pub fn outside_bounds(sprite: &Sprite, bounds: &Bounds) -> Option<BoundarySides> {
    outside_bounds_with(sprite, bounds, |_| {})
}

/// Like [`outside_bounds`], calling `on_hit` when the sprite is outside.
pub fn outside_bounds_with<F>(sprite: &Sprite, bounds: &Bounds, mut on_hit: F) -> Option<BoundarySides>
where
    F: FnMut(BoundarySides),
{
    let g = sprite.geometry(Space::Global);
    let mut sides = BoundarySides::empty();

    if g.right() < bounds.left() {
        sides |= BoundarySides::LEFT;
    }
    if g.bottom() < bounds.top() {
        sides |= BoundarySides::TOP;
    }
    if g.left() > bounds.right() {
        sides |= BoundarySides::RIGHT;
    }
    if g.top() > bounds.bottom() {
        sides |= BoundarySides::BOTTOM;
    }

    let sides = sides.non_empty()?;
    on_hit(sides);
    Some(sides)
}
