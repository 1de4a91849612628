pub mod settings;

pub use settings::CollisionSettings;
