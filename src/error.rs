use thiserror::Error;

use crate::world::TargetKind;

/// Errors surfaced by the collision API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollisionError {
    /// The dispatcher has no routine for this pair of targets.
    #[error("a {first} and a {second} cannot be used together in a collision test")]
    UnsupportedShapePair {
        first: TargetKind,
        second: TargetKind,
    },

    /// A direction vector had zero (or non-finite) length.
    #[error("cannot derive a direction from a zero-length vector")]
    DegenerateVector,
}
