//! # Cylinders and Frustums
//!
//! Circular prisms used for bosses, bores, pins and shaft sections, and
//! conical frustums used for tapers and funnel entries.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a right circular cylinder along +Z with its base at z=0.
///
/// # Example
///
/// ```rust
/// use grounds_mesh::primitives::create_cylinder;
///
/// let boss = create_cylinder(15.0, 11.2, 48).unwrap();
/// assert!(boss.validate());
/// ```
pub fn create_cylinder(height: f64, radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    create_frustum(height, radius, radius, segments)
}

/// Creates a conical frustum along +Z with its base at z=0.
///
/// Both radii must be positive; the part generators have no use for true
/// cones, and keeping an apex out of the vertex ring simplifies the caps.
///
/// # Arguments
///
/// * `height` - Extent along Z
/// * `radius_bottom` - Radius at z=0
/// * `radius_top` - Radius at z=height
/// * `segments` - Chords around the circumference
pub fn create_frustum(
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "frustum height must be positive: {}",
            height
        )));
    }
    if radius_bottom <= 0.0 || radius_top <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "frustum radii must be positive: r1={}, r2={}",
            radius_bottom, radius_top
        )));
    }
    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
        return Err(MeshError::degenerate(format!(
            "segment count {} outside [{}, {}]",
            segments, MIN_SEGMENTS, MAX_SEGMENTS
        )));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);

    // Bottom ring, then top ring
    for (radius, z) in [(radius_bottom, 0.0), (radius_top, height)] {
        for j in 0..n {
            let theta = 2.0 * PI * j as f64 / n as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z));
        }
    }

    // Side wall
    for j in 0..n {
        let j_next = (j + 1) % n;
        let b0 = j as u32;
        let b1 = j_next as u32;
        let t0 = (n + j) as u32;
        let t1 = (n + j_next) as u32;
        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    // Caps: bottom faces -Z, top faces +Z
    for j in 1..n - 1 {
        mesh.add_triangle(0, (j + 1) as u32, j as u32);
        mesh.add_triangle(n as u32, (n + j) as u32, (n + j + 1) as u32);
    }

    Ok(mesh)
}
