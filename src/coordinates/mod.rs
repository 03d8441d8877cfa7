pub mod attitude;
pub mod vector;

pub use attitude::{Line, Plane};
pub use vector::Vec3;
