//! # Part Generation Errors

use grounds_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while generating a part.
#[derive(Debug, Error)]
pub enum PartError {
    /// The dimension set violates an invariant or range
    #[error(transparent)]
    Dimension(#[from] crate::dimensions::DimensionError),

    /// The geometry kernel rejected a construction
    #[error("Geometry construction failed: {0}")]
    Mesh(#[from] MeshError),
}
