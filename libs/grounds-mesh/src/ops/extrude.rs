//! # Linear Extrusion
//!
//! Extrudes a convex 2D profile along +Z into a capped prism.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::profile::Profile;
use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec3;

/// Extrudes a profile from z=0 to z=height.
///
/// The profile must be convex and counter-clockwise; both caps are fan
/// triangulated.
///
/// # Example
///
/// ```rust
/// use grounds_mesh::{extrude, Profile};
/// use glam::DVec2;
///
/// let plate = extrude(&Profile::rectangle(DVec2::new(35.0, 55.0)).unwrap(), 2.5).unwrap();
/// assert!(plate.validate());
/// ```
pub fn extrude(profile: &Profile, height: f64) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "extrusion height must be positive: {}",
            height
        )));
    }

    let n = profile.vertex_count();
    check_limits(2 * n, 4 * n - 4)?;

    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);

    for z in [0.0, height] {
        for p in profile.points() {
            mesh.add_vertex(DVec3::new(p.x, p.y, z));
        }
    }

    // Side walls: one quad per profile edge
    for i in 0..n {
        let j = (i + 1) % n;
        let b0 = i as u32;
        let b1 = j as u32;
        let t0 = (n + i) as u32;
        let t1 = (n + j) as u32;
        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    // Caps: bottom faces -Z, top faces +Z
    for i in 1..n - 1 {
        mesh.add_triangle(0, (i + 1) as u32, i as u32);
        mesh.add_triangle(n as u32, (n + i) as u32, (n + i + 1) as u32);
    }

    Ok(mesh)
}

pub(crate) fn check_limits(vertices: usize, triangles: usize) -> Result<(), MeshError> {
    if vertices > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertices,
            max: MAX_VERTICES,
        });
    }
    if triangles > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangles,
            max: MAX_TRIANGLES,
        });
    }
    Ok(())
}
