use tracing::debug;

use crate::collision::hit_test::{
    hit_test_circle, hit_test_circle_point, hit_test_circle_rectangle, hit_test_point,
    hit_test_rectangle,
};
use crate::collision::outcome::Collision;
use crate::collision::response::{
    circle_collision, circle_point_collision, circle_rectangle_collision,
    moving_circle_collision, rectangle_collision,
};
use crate::common::CollisionSettings;
use crate::error::CollisionError;
use crate::objects::{Space, Sprite};
use crate::shapes::ShapeKind;
use crate::world::target::Target;

/// How [`Collider::hit`] should treat a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitOptions {
    /// Separate overlapping sprites instead of only testing them.
    pub react: bool,
    /// Bounce when reacting. Moving circle pairs always bounce.
    pub bounce: bool,
    pub space: Space,
}

impl HitOptions {
    /// Options that separate sprites and optionally bounce them.
    pub fn reacting(bounce: bool) -> Self {
        HitOptions {
            react: true,
            bounce,
            ..Default::default()
        }
    }

    pub fn in_space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }
}

/// Entry point that picks the right test or response for a pair of targets.
#[derive(Debug, Clone, Default)]
pub struct Collider {
    pub settings: CollisionSettings,
}

impl Collider {
    /// Creates a collider with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CollisionSettings) -> Self {
        Self { settings }
    }

    /// Tests (or resolves, with `options.react`) `a` against `b`.
    ///
    /// Either side may be a group, but not both. See [`Collider::hit_with`].
    pub fn hit<'a, 'b>(
        &self,
        a: impl Into<Target<'a>>,
        b: impl Into<Target<'b>>,
        options: HitOptions,
    ) -> Result<Option<Collision>, CollisionError> {
        self.hit_with(a, b, options, |_, _| {})
    }

    /// Like [`Collider::hit`], calling `on_hit` with the outcome and the other
    /// sprite of every colliding pair.
    ///
    /// With a group on either side, the single sprite keeps its argument
    /// position and is paired with each member from the last index to the
    /// first; the "other" sprite passed to `on_hit` is the member. The
    /// returned value is the last hit in that order.
    pub fn hit_with<'a, 'b, F>(
        &self,
        a: impl Into<Target<'a>>,
        b: impl Into<Target<'b>>,
        options: HitOptions,
        mut on_hit: F,
    ) -> Result<Option<Collision>, CollisionError>
    where
        F: FnMut(Collision, &Sprite),
    {
        match (a.into(), b.into()) {
            (Target::One(a), Target::One(b)) => {
                let collision = self.dispatch(a, b, options)?;
                if let Some(collision) = collision {
                    on_hit(collision, b);
                }
                Ok(collision)
            }
            (Target::One(single), Target::Group(group)) => {
                let mut last = None;
                for member in group.iter_mut().rev() {
                    if let Some(collision) = self.dispatch(single, member, options)? {
                        on_hit(collision, member);
                        last = Some(collision);
                    }
                }
                Ok(last)
            }
            (Target::Group(group), Target::One(single)) => {
                let mut last = None;
                for member in group.iter_mut().rev() {
                    if let Some(collision) = self.dispatch(member, single, options)? {
                        on_hit(collision, member);
                        last = Some(collision);
                    }
                }
                Ok(last)
            }
            (first @ Target::Group(_), second @ Target::Group(_)) => {
                Err(CollisionError::UnsupportedShapePair {
                    first: first.kind(),
                    second: second.kind(),
                })
            }
        }
    }

    /// Routes one sprite pair to its test or response.
    fn dispatch(
        &self,
        a: &mut Sprite,
        b: &mut Sprite,
        options: HitOptions,
    ) -> Result<Option<Collision>, CollisionError> {
        let HitOptions { react, bounce, space } = options;
        let settings = &self.settings;

        let collision = match (a.kind(), b.kind()) {
            (ShapeKind::Circle, ShapeKind::Circle) => {
                let hit = if !react {
                    hit_test_circle(a, b, space)
                } else if a.is_moving() && b.is_moving() {
                    moving_circle_collision(a, b, space, settings)
                } else {
                    circle_collision(a, b, bounce, space, settings)
                };
                hit.then_some(Collision::Hit)
            }
            (ShapeKind::Circle, ShapeKind::Rectangle) => {
                let region = if react {
                    circle_rectangle_collision(a, b, bounce, space, settings)
                } else {
                    hit_test_circle_rectangle(a, b, space, settings)
                };
                region.map(Collision::Region)
            }
            (ShapeKind::Rectangle, ShapeKind::Rectangle | ShapeKind::Circle) => {
                if react {
                    rectangle_collision(a, b, bounce, space).map(Collision::Side)
                } else {
                    hit_test_rectangle(a, b, space).then_some(Collision::Hit)
                }
            }
            (ShapeKind::Circle, ShapeKind::Point) => {
                let point = b.geometry(space).position;
                let hit = if react {
                    circle_point_collision(a, point, bounce, space, settings)
                } else {
                    hit_test_circle_point(a, point, space)
                };
                hit.then_some(Collision::Hit)
            }
            (ShapeKind::Rectangle, ShapeKind::Point) => {
                let point = b.geometry(space).position;
                hit_test_point(point, a, space).then_some(Collision::Hit)
            }
            (ShapeKind::Point, ShapeKind::Circle | ShapeKind::Rectangle) => {
                let point = a.geometry(space).position;
                hit_test_point(point, b, space).then_some(Collision::Hit)
            }
            (ShapeKind::Point, ShapeKind::Point) => {
                debug!("rejected point vs point collision test");
                return Err(CollisionError::UnsupportedShapePair {
                    first: a.kind().into(),
                    second: b.kind().into(),
                });
            }
        };

        Ok(collision)
    }
}
