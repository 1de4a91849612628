pub mod bounce;
pub mod bounds;
pub mod containment;
pub mod hit_test;
pub mod outcome;
pub mod region;
pub mod response;

// Re-export key types
pub use bounce::{bounce_off_surface, Surface};
pub use bounds::Bounds;
pub use containment::{contain, contain_with, outside_bounds, outside_bounds_with};
pub use hit_test::{
    hit_test_circle, hit_test_circle_point, hit_test_circle_rectangle, hit_test_point,
    hit_test_rectangle,
};
pub use outcome::{BoundarySides, Collision, Region, Side};
pub use region::classify_region;
pub use response::{
    circle_collision, circle_point_collision, circle_rectangle_collision,
    moving_circle_collision, multiple_circle_collision, rectangle_collision,
};
