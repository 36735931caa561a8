//! # STEP Writer
//!
//! Boundary-representation output via the truck CAD kernel. Each mesh
//! triangle becomes a planar B-rep face; the result is a faceted STEP
//! body suitable for CAD import, not a smooth-surface reconstruction.

use crate::error::{IoError, IoResult};
use grounds_mesh::Mesh;
use std::fs;
use std::io::Write;
use std::path::Path;
use truck_modeling::{builder, Point3};
use truck_stepio::out::{CompleteStepDisplay, StepHeaderDescriptor, StepModel};
use truck_topology::{Shell, Wire};

/// Saves a mesh as a faceted STEP boundary representation.
///
/// Written to a temporary sibling and renamed into place, like the STL
/// writer.
pub fn save_step<P: AsRef<Path>>(mesh: &Mesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    if mesh.triangle_count() == 0 {
        return Err(IoError::EmptyMesh {
            path: path.to_path_buf(),
        });
    }

    let mut faces = Vec::with_capacity(mesh.triangle_count());
    for tri in mesh.triangles() {
        let p0 = mesh.vertex(tri[0]);
        let p1 = mesh.vertex(tri[1]);
        let p2 = mesh.vertex(tri[2]);

        if let Some(face) = triangle_face(
            Point3::new(p0.x, p0.y, p0.z),
            Point3::new(p1.x, p1.y, p1.z),
            Point3::new(p2.x, p2.y, p2.z),
        ) {
            faces.push(face);
        }
    }

    if faces.is_empty() {
        return Err(IoError::invalid_content(
            "no valid triangles to convert to STEP faces",
        ));
    }

    let shell: Shell<_, _, _> = faces.into();
    let compressed = shell.compress();

    let step_string = CompleteStepDisplay::new(
        StepModel::from(&compressed),
        StepHeaderDescriptor {
            organization_system: "grounds-cad".to_owned(),
            ..Default::default()
        },
    )
    .to_string();

    let tmp = path.with_extension("step.tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(step_string.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;

    Ok(())
}

/// Builds one planar triangular face, or None for a degenerate triangle.
fn triangle_face(
    p0: Point3,
    p1: Point3,
    p2: Point3,
) -> Option<
    truck_topology::Face<truck_modeling::Point3, truck_modeling::Curve, truck_modeling::Surface>,
> {
    // Degeneracy check on the raw coordinates: cross product magnitude
    let ux = p1.x - p0.x;
    let uy = p1.y - p0.y;
    let uz = p1.z - p0.z;
    let vx = p2.x - p0.x;
    let vy = p2.y - p0.y;
    let vz = p2.z - p0.z;
    let cx = uy * vz - uz * vy;
    let cy = uz * vx - ux * vz;
    let cz = ux * vy - uy * vx;
    if (cx * cx + cy * cy + cz * cz).sqrt() < 1e-10 {
        return None;
    }

    let v0 = builder::vertex(p0);
    let v1 = builder::vertex(p1);
    let v2 = builder::vertex(p2);

    let edge0 = builder::line(&v0, &v1);
    let edge1 = builder::line(&v1, &v2);
    let edge2 = builder::line(&v2, &v0);

    let wire = Wire::from(vec![edge0, edge1, edge2]);
    builder::try_attach_plane(&[wire]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use grounds_mesh::primitives::create_box;

    #[test]
    fn test_save_step_writes_iso_file() {
        let mesh = create_box(DVec3::splat(10.0), false).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.step");

        save_step(&mesh, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("ISO-10303-21;"));
        assert!(content.contains("CARTESIAN_POINT"));
    }

    #[test]
    fn test_save_step_rejects_empty_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_step(&Mesh::new(), dir.path().join("empty.step"));
        assert!(matches!(result, Err(IoError::EmptyMesh { .. })));
    }
}
