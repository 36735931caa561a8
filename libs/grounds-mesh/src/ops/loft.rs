//! # Lofting
//!
//! Skins a stack of convex profiles at increasing heights into a single
//! solid. This is what the handle shell, nail-hole tapers and grip end
//! caps are built from.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::extrude::check_limits;
use crate::profile::Profile;
use glam::DVec3;

/// Lofts a sequence of profiles into a capped solid.
///
/// All sections must share the same vertex count (corresponding points are
/// connected in order), and the z values must be strictly increasing.
///
/// # Example
///
/// ```rust
/// use grounds_mesh::{loft, Profile};
///
/// // A conical socket taper: wide at the top, narrow at the bottom
/// let sections = vec![
///     (Profile::circle(0.7, 24).unwrap(), 0.0),
///     (Profile::circle(1.75, 24).unwrap(), 2.0),
/// ];
/// let taper = loft(&sections).unwrap();
/// assert!(taper.validate());
/// ```
pub fn loft(sections: &[(Profile, f64)]) -> Result<Mesh, MeshError> {
    if sections.len() < 2 {
        return Err(MeshError::invalid_profile(format!(
            "loft needs at least 2 sections, got {}",
            sections.len()
        )));
    }

    let n = sections[0].0.vertex_count();
    for (index, (profile, _)) in sections.iter().enumerate() {
        if profile.vertex_count() != n {
            return Err(MeshError::SectionMismatch {
                index,
                count: profile.vertex_count(),
                expected: n,
            });
        }
    }
    for pair in sections.windows(2) {
        if pair[1].1 <= pair[0].1 {
            return Err(MeshError::degenerate(format!(
                "loft section heights must be strictly increasing: {} then {}",
                pair[0].1, pair[1].1
            )));
        }
    }

    let rings = sections.len();
    check_limits(rings * n, 2 * n * (rings - 1) + 2 * (n - 2))?;

    let mut mesh = Mesh::with_capacity(rings * n, 2 * n * (rings - 1) + 2 * (n - 2));

    for (profile, z) in sections {
        for p in profile.points() {
            mesh.add_vertex(DVec3::new(p.x, p.y, *z));
        }
    }

    // Walls between consecutive rings
    for r in 0..rings - 1 {
        let base = r * n;
        let next = (r + 1) * n;
        for i in 0..n {
            let j = (i + 1) % n;
            mesh.add_triangle((base + i) as u32, (base + j) as u32, (next + j) as u32);
            mesh.add_triangle((base + i) as u32, (next + j) as u32, (next + i) as u32);
        }
    }

    // Caps on the first and last rings
    let top = (rings - 1) * n;
    for i in 1..n - 1 {
        mesh.add_triangle(0, (i + 1) as u32, i as u32);
        mesh.add_triangle(top as u32, (top + i) as u32, (top + i + 1) as u32);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_loft_prism_equals_extrude() {
        let profile = Profile::rectangle(DVec2::new(10.0, 10.0)).unwrap();
        let sections = vec![(profile.clone(), 0.0), (profile, 5.0)];
        let mesh = loft(&sections).unwrap();
        assert!(mesh.validate());
        assert!((mesh.volume() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_loft_pyramid_frustum() {
        let sections = vec![
            (Profile::rectangle(DVec2::new(20.0, 20.0)).unwrap(), 0.0),
            (Profile::rectangle(DVec2::new(10.0, 10.0)).unwrap(), 6.0),
        ];
        let mesh = loft(&sections).unwrap();
        // V = h/3 (A1 + A2 + sqrt(A1*A2))
        let expected = 6.0 / 3.0 * (400.0 + 100.0 + 200.0);
        assert!((mesh.volume() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_loft_three_sections() {
        let sections = vec![
            (Profile::rectangle(DVec2::new(70.0, 20.0)).unwrap(), 0.0),
            (Profile::rectangle(DVec2::new(65.0, 12.0)).unwrap(), 6.0),
            (Profile::rectangle(DVec2::new(60.0, 15.0)).unwrap(), 12.0),
        ];
        let mesh = loft(&sections).unwrap();
        assert!(mesh.validate());
        assert!(mesh.volume() > 0.0);
    }

    #[test]
    fn test_loft_mismatched_sections() {
        let sections = vec![
            (Profile::rectangle(DVec2::new(10.0, 10.0)).unwrap(), 0.0),
            (Profile::circle(5.0, 24).unwrap(), 5.0),
        ];
        let err = loft(&sections).unwrap_err();
        assert!(matches!(err, MeshError::SectionMismatch { index: 1, .. }));
    }

    #[test]
    fn test_loft_non_increasing_heights() {
        let profile = Profile::rectangle(DVec2::new(10.0, 10.0)).unwrap();
        let sections = vec![(profile.clone(), 0.0), (profile, 0.0)];
        assert!(loft(&sections).is_err());
    }

    #[test]
    fn test_loft_single_section() {
        let profile = Profile::rectangle(DVec2::new(10.0, 10.0)).unwrap();
        assert!(loft(&[(profile, 0.0)]).is_err());
    }
}
