#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its extent only; where it sits is
/// up to the owning sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        assert!(
            width >= 0.0 && height >= 0.0,
            "Rectangle extent cannot be negative"
        );
        Self { width, height }
    }
}
