//! # STL Writer
//!
//! Binary STL output for slicing.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```

use crate::error::{IoError, IoResult};
use config::constants::STL_HEADER_TAG;
use grounds_mesh::Mesh;
use std::fs;
use std::io::Write;
use std::path::Path;

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Serializes a mesh as binary STL bytes.
///
/// Deterministic: the same mesh always produces identical bytes, which is
/// what makes regeneration byte-identical.
pub fn stl_bytes(mesh: &Mesh) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE + 4 + mesh.triangle_count() * TRIANGLE_SIZE);

    let mut header = [0u8; HEADER_SIZE];
    let tag = STL_HEADER_TAG.as_bytes();
    header[..tag.len()].copy_from_slice(tag);
    bytes.extend_from_slice(&header);

    bytes.extend_from_slice(&(mesh.triangle_count() as u32).to_le_bytes());

    for tri in mesh.triangles() {
        let v0 = mesh.vertex(tri[0]);
        let v1 = mesh.vertex(tri[1]);
        let v2 = mesh.vertex(tri[2]);

        let normal = (v1 - v0).cross(v2 - v0);
        let normal = if normal.length() > 0.0 {
            normal.normalize()
        } else {
            normal
        };

        for v in [normal, v0, v1, v2] {
            bytes.extend_from_slice(&(v.x as f32).to_le_bytes());
            bytes.extend_from_slice(&(v.y as f32).to_le_bytes());
            bytes.extend_from_slice(&(v.z as f32).to_le_bytes());
        }
        bytes.extend_from_slice(&0u16.to_le_bytes());
    }

    bytes
}

/// Saves a mesh as binary STL.
///
/// The file is written to a temporary sibling and renamed into place, so
/// a crashed run never leaves a truncated STL behind.
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    if mesh.triangle_count() == 0 {
        return Err(IoError::EmptyMesh {
            path: path.to_path_buf(),
        });
    }

    let tmp = path.with_extension("stl.tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(&stl_bytes(mesh))?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use grounds_mesh::primitives::create_box;

    #[test]
    fn test_stl_bytes_layout() {
        let mesh = create_box(DVec3::splat(10.0), false).unwrap();
        let bytes = stl_bytes(&mesh);
        assert_eq!(bytes.len(), HEADER_SIZE + 4 + 12 * TRIANGLE_SIZE);

        let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
        assert_eq!(count, 12);
        assert!(bytes.starts_with(STL_HEADER_TAG.as_bytes()));
    }

    #[test]
    fn test_stl_bytes_deterministic() {
        let a = create_box(DVec3::splat(10.0), false).unwrap();
        let b = create_box(DVec3::splat(10.0), false).unwrap();
        assert_eq!(stl_bytes(&a), stl_bytes(&b));
    }

    #[test]
    fn test_save_stl_round_trip() {
        let mesh = create_box(DVec3::splat(10.0), false).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.stl");

        save_stl(&mesh, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, stl_bytes(&mesh));
        assert!(!path.with_extension("stl.tmp").exists());
    }

    #[test]
    fn test_save_stl_rejects_empty_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.stl");
        let result = save_stl(&Mesh::new(), &path);
        assert!(matches!(result, Err(IoError::EmptyMesh { .. })));
        assert!(!path.exists());
    }
}
