//! Velocity reflection off an arbitrary surface direction.

use tracing::warn;

use crate::error::CollisionError;
use crate::math::Vec2;
use crate::objects::Sprite;

/// A bounce surface: a unit direction along the surface plus its left normal.
/// Built per bounce and thrown away afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub direction: Vec2,
    pub left_normal: Vec2,
    /// Length of the vector the surface was built from.
    pub magnitude: f64,
}

impl Surface {
    /// Builds a surface from any non-zero vector lying along it.
    pub fn new(vector: Vec2) -> Result<Self, CollisionError> {
        let direction = vector
            .try_normalize()
            .ok_or(CollisionError::DegenerateVector)?;
        Ok(Surface {
            direction,
            left_normal: direction.left_normal(),
            magnitude: vector.magnitude(),
        })
    }

    /// Surface from a vector already known to be unit length.
    pub(crate) fn from_unit(direction: Vec2) -> Self {
        Surface {
            direction,
            left_normal: direction.left_normal(),
            magnitude: 1.0,
        }
    }

    /// Reflects `velocity`: the component along the surface is kept, the
    /// component along the normal is reversed.
    pub fn reflect(&self, velocity: Vec2) -> Vec2 {
        let along = velocity.project_onto(self.direction);
        let across = velocity.project_onto(self.left_normal);
        along - across
    }
}

/// Bounces `sprite` off `surface`, damping the result by the sprite's mass.
///
/// Returns the sprite's new velocity. A zero-length surface is rejected with
/// [`CollisionError::DegenerateVector`] and the velocity is left untouched.
pub fn bounce_off_surface(sprite: &mut Sprite, surface: Vec2) -> Result<Vec2, CollisionError> {
    let surface = Surface::new(surface).inspect_err(|_| {
        warn!(?surface, "rejected bounce off a zero-length surface");
    })?;
    apply_bounce(sprite, &surface);
    Ok(sprite.velocity)
}

pub(crate) fn apply_bounce(sprite: &mut Sprite, surface: &Surface) {
    sprite.velocity = surface.reflect(sprite.velocity) / sprite.effective_mass();
}
