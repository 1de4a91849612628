//! Collision detection and response for 2D sprite games.
//!
//! Sprites are plain [`Sprite`] values owned by the caller. Each routine
//! reads their shape, anchor and position, and responses write back only
//! `position` and `velocity`. Use the individual functions in [`collision`]
//! directly, or let [`Collider::hit`] pick the right one for a pair.
//!
//! ```
//! use sprite_bump::{Collider, Collision, HitOptions, Side, Sprite};
//!
//! let collider = Collider::new();
//! let mut player = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
//! let mut wall = Sprite::rectangle(5.0, 5.0, 10.0, 10.0);
//!
//! let hit = collider.hit(&mut player, &mut wall, HitOptions::reacting(false)).unwrap();
//! assert_eq!(hit, Some(Collision::Side(Side::Bottom)));
//! ```

pub mod collision;
pub mod common;
pub mod error;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{BoundarySides, Bounds, Collision, Region, Side, Surface};
pub use common::CollisionSettings;
pub use error::CollisionError;
pub use math::Vec2;
pub use objects::{Geometry, Space, Sprite};
pub use shapes::{Circle, Rectangle, Shape, ShapeKind};
pub use world::{Collider, HitOptions, Target, TargetKind};
