//! # Mesh Errors
//!
//! Error types for mesh construction and CSG operations.

use thiserror::Error;

/// Errors that can occur while building solids.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry (zero or negative size, too few segments, ...)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A 2D profile that cannot be extruded or lofted
    #[error("Invalid profile: {message}")]
    InvalidProfile { message: String },

    /// Loft sections with mismatched vertex counts
    #[error("Loft section {index} has {count} vertices, expected {expected}")]
    SectionMismatch {
        index: usize,
        count: usize,
        expected: usize,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid profile error.
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
        }
    }
}
