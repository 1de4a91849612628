pub mod geometry;
pub mod sprite;

pub use geometry::Geometry;
pub use sprite::{Space, Sprite};
