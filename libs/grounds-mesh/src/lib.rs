//! # Grounds Mesh
//!
//! Constructive geometry substrate for the coffee-grounds container
//! generators. Solids are triangle meshes built from primitives and
//! combined with CSG boolean operations.
//!
//! ## Architecture
//!
//! ```text
//! Profile (2D) → extrude/loft → Mesh ← primitives
//!                                 │
//!                          boolean ops (BSP)
//! ```
//!
//! ## Algorithms
//!
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Caps**: Fan triangulation (profiles are convex)
//! - **Primitives**: Direct mesh generation
//!
//! ## Usage
//!
//! ```rust
//! use grounds_mesh::{difference, primitives::create_box};
//! use glam::DVec3;
//!
//! let outer = create_box(DVec3::splat(20.0), true).unwrap();
//! let cavity = create_box(DVec3::splat(16.0), true).unwrap();
//! let shell = difference(&outer, &cavity);
//! assert!(shell.volume() > 0.0);
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod profile;

pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::boolean::{difference, difference_all, intersection, union, union_all};
pub use ops::extrude::extrude;
pub use ops::loft::loft;
pub use profile::Profile;
