//! # Primitives
//!
//! Direct mesh constructors for the base solids the part generators
//! combine: rectangular prisms, cylinders/frustums, and tubes.

mod cuboid;
mod cylinder;
mod tube;

pub use cuboid::{create_box, create_rounded_box};
pub use cylinder::{create_cylinder, create_frustum};
pub use tube::create_tube;
