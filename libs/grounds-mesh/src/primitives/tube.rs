//! # Tubes
//!
//! Hollow cylinders with annular caps. Used for the seal ring and
//! anywhere a bore would otherwise need a boolean cut of two cylinders.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a tube (hollow cylinder) along +Z with its base at z=0.
///
/// # Arguments
///
/// * `height` - Extent along Z
/// * `outer_radius` - Outer wall radius
/// * `inner_radius` - Bore radius, strictly smaller than the outer radius
/// * `segments` - Chords around the circumference
///
/// # Example
///
/// ```rust
/// use grounds_mesh::primitives::create_tube;
///
/// let seal_ring = create_tube(2.0, 10.6, 9.6, 48).unwrap();
/// assert!(seal_ring.validate());
/// ```
pub fn create_tube(
    height: f64,
    outer_radius: f64,
    inner_radius: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "tube height must be positive: {}",
            height
        )));
    }
    if inner_radius <= 0.0 || outer_radius <= inner_radius {
        return Err(MeshError::degenerate(format!(
            "tube radii must satisfy 0 < inner < outer: inner={}, outer={}",
            inner_radius, outer_radius
        )));
    }
    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
        return Err(MeshError::degenerate(format!(
            "segment count {} outside [{}, {}]",
            segments, MIN_SEGMENTS, MAX_SEGMENTS
        )));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(4 * n, 8 * n);

    // Ring order: bottom outer, bottom inner, top outer, top inner
    for (radius, z) in [
        (outer_radius, 0.0),
        (inner_radius, 0.0),
        (outer_radius, height),
        (inner_radius, height),
    ] {
        for j in 0..n {
            let theta = 2.0 * PI * j as f64 / n as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z));
        }
    }

    let bo = |j: usize| j as u32;
    let bi = |j: usize| (n + j) as u32;
    let to = |j: usize| (2 * n + j) as u32;
    let ti = |j: usize| (3 * n + j) as u32;

    for j in 0..n {
        let k = (j + 1) % n;

        // Outer wall, facing outward
        mesh.add_triangle(bo(j), bo(k), to(k));
        mesh.add_triangle(bo(j), to(k), to(j));

        // Inner wall, facing the bore
        mesh.add_triangle(bi(j), ti(k), bi(k));
        mesh.add_triangle(bi(j), ti(j), ti(k));

        // Bottom annulus, facing -Z
        mesh.add_triangle(bo(j), bi(k), bo(k));
        mesh.add_triangle(bo(j), bi(j), bi(k));

        // Top annulus, facing +Z
        mesh.add_triangle(to(j), to(k), ti(k));
        mesh.add_triangle(to(j), ti(k), ti(j));
    }

    Ok(mesh)
}
