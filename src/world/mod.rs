pub mod collider;
pub mod target;

pub use collider::{Collider, HitOptions};
pub use target::{Target, TargetKind};
