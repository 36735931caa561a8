//! # Named Solids
//!
//! A generator's output: an immutable mesh with the artifact name used
//! for its output files.

use grounds_mesh::Mesh;

/// One write-once output artifact.
#[derive(Debug, Clone)]
pub struct NamedSolid {
    /// Artifact name, also the output file stem (`box` → `box.stl`)
    pub name: String,
    /// The solid geometry
    pub mesh: Mesh,
}

impl NamedSolid {
    /// Creates a named solid.
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh,
        }
    }
}
