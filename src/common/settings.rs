//! Tunable constants for collision response.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning knobs shared by the response routines.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollisionSettings {
    /// Extra separation added after resolving circle overlap so resting
    /// circles do not keep re-touching. Too little feels sticky, too much
    /// makes jammed circles jitter.
    pub quantum_padding: f64,
    /// Pixels by which the corner regions around a rectangle are pushed
    /// outwards, biasing near-corner circles toward a flat-edge bounce.
    pub corner_bias: f64,
    /// Radius of the degenerate circle a point becomes in circle responses.
    pub point_radius: f64,
}

impl CollisionSettings {
    pub const DEFAULT_QUANTUM_PADDING: f64 = 0.3;
    pub const DEFAULT_CORNER_BIAS: f64 = 1.0;
    pub const DEFAULT_POINT_RADIUS: f64 = 0.5;

    /// Creates settings, clamping every value to be non-negative.
    pub fn new(quantum_padding: f64, corner_bias: f64, point_radius: f64) -> Self {
        CollisionSettings {
            quantum_padding: quantum_padding.max(0.0),
            corner_bias: corner_bias.max(0.0),
            point_radius: point_radius.max(0.0),
        }
    }
}

impl Default for CollisionSettings {
    fn default() -> Self {
        CollisionSettings {
            quantum_padding: Self::DEFAULT_QUANTUM_PADDING,
            corner_bias: Self::DEFAULT_CORNER_BIAS,
            point_radius: Self::DEFAULT_POINT_RADIUS,
        }
    }
}
