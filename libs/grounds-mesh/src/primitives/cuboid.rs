//! # Rectangular Prisms
//!
//! Plain and rounded-corner boxes. Rounded boxes are how the vertical
//! edge fillets of the container are produced.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::extrude::extrude;
use crate::profile::Profile;
use glam::{DVec2, DVec3};

/// Creates a rectangular prism.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `center` - If true, center at origin; if false, corner at origin
///
/// # Example
///
/// ```rust
/// use grounds_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::splat(10.0), false).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(size: DVec3, center: bool) -> Result<Mesh, MeshError> {
    if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "box size must be positive: {:?}",
            size
        )));
    }

    let profile = Profile::rectangle(DVec2::new(size.x, size.y))?;
    let mut mesh = extrude(&profile, size.z)?;

    // extrude() centers XY on the origin with the base at z=0
    if center {
        mesh.translate(DVec3::new(0.0, 0.0, -size.z / 2.0));
    } else {
        mesh.translate(DVec3::new(size.x / 2.0, size.y / 2.0, 0.0));
    }

    Ok(mesh)
}

/// Creates a rectangular prism with filleted vertical edges.
///
/// The fillet is applied by extruding a rounded-rectangle outline, so the
/// four vertical edges carry circular arcs of the given radius while top
/// and bottom remain flat.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `corner_radius` - Vertical edge fillet radius
/// * `corner_segments` - Arc segments per corner
/// * `center` - If true, center at origin; if false, base at z=0 (XY always
///   centered, matching the container part layout)
pub fn create_rounded_box(
    size: DVec3,
    corner_radius: f64,
    corner_segments: u32,
    center: bool,
) -> Result<Mesh, MeshError> {
    if size.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "box height must be positive: {}",
            size.z
        )));
    }

    let profile =
        Profile::rounded_rectangle(DVec2::new(size.x, size.y), corner_radius, corner_segments)?;
    let mut mesh = extrude(&profile, size.z)?;

    if center {
        mesh.translate(DVec3::new(0.0, 0.0, -size.z / 2.0));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_counts() {
        let mesh = create_box(DVec3::splat(10.0), false).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate());
    }

    #[test]
    fn test_box_not_centered() {
        let mesh = create_box(DVec3::splat(10.0), false).unwrap();
        let (min, max) = mesh.bounding_box();
        assert!(min.abs_diff_eq(DVec3::ZERO, 1e-12));
        assert!(max.abs_diff_eq(DVec3::splat(10.0), 1e-12));
    }

    #[test]
    fn test_box_centered() {
        let mesh = create_box(DVec3::splat(10.0), true).unwrap();
        let (min, max) = mesh.bounding_box();
        assert!(min.abs_diff_eq(DVec3::splat(-5.0), 1e-12));
        assert!(max.abs_diff_eq(DVec3::splat(5.0), 1e-12));
    }

    #[test]
    fn test_box_invalid_size() {
        assert!(create_box(DVec3::new(0.0, 10.0, 10.0), false).is_err());
        assert!(create_box(DVec3::new(-5.0, 10.0, 10.0), false).is_err());
    }

    #[test]
    fn test_rounded_box_volume_below_sharp_box() {
        let sharp = 200.0 * 150.0 * 150.0;
        let mesh =
            create_rounded_box(DVec3::new(200.0, 150.0, 150.0), 8.0, 8, false).unwrap();
        let v = mesh.volume();
        assert!(v < sharp);
        // Corner loss is (4 - pi) r^2 h, small relative to the solid
        let expected = sharp - (4.0 - std::f64::consts::PI) * 8.0 * 8.0 * 150.0;
        assert!((v - expected).abs() / expected < 0.01);
    }

    #[test]
    fn test_rounded_box_base_at_origin() {
        let mesh = create_rounded_box(DVec3::new(20.0, 20.0, 10.0), 3.0, 8, false).unwrap();
        let (min, max) = mesh.bounding_box();
        assert!((min.z - 0.0).abs() < 1e-12);
        assert!((max.z - 10.0).abs() < 1e-12);
        assert!((min.x + 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_rounded_box_radius_too_large() {
        assert!(create_rounded_box(DVec3::new(10.0, 10.0, 10.0), 6.0, 8, false).is_err());
    }
}
