//! # Mesh Operations
//!
//! Operations that build or combine solids: profile extrusion, lofting,
//! and CSG booleans.

pub mod boolean;
pub mod extrude;
pub mod loft;
