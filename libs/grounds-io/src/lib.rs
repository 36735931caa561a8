//! # Grounds IO
//!
//! Output writers for the container generators: binary STL for slicing,
//! and (with the default `step` feature) STEP boundary representation via
//! the truck CAD kernel.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use grounds_io::{write_mesh, OutputFormat};
//! use grounds_mesh::primitives::create_box;
//! use glam::DVec3;
//! # use std::path::Path;
//!
//! let mesh = create_box(DVec3::splat(10.0), false).unwrap();
//! write_mesh(&mesh, Path::new("out"), "cube", OutputFormat::all()).unwrap();
//! ```

pub mod error;
pub mod export;
#[cfg(feature = "step")]
pub mod step;
pub mod stl;

pub use error::{IoError, IoResult};
pub use export::{write_mesh, OutputFormat};
#[cfg(feature = "step")]
pub use step::save_step;
pub use stl::{save_stl, stl_bytes};
