//! # Mesh Data Structure
//!
//! Core triangle mesh representation shared by every part generator.

use glam::{DMat4, DVec3};

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally; conversion to f32 only
/// happens in the file writers.
///
/// # Example
///
/// ```rust
/// use grounds_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle, CCW when seen from outside)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Returns a translated copy of the mesh.
    pub fn translated(&self, offset: DVec3) -> Mesh {
        let mut mesh = self.clone();
        mesh.translate(offset);
        mesh
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// Winding is preserved for rigid transforms; mirroring matrices are
    /// not supported by the part generators.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Rotates the mesh around the X axis (radians).
    pub fn rotate_x(&mut self, angle: f64) {
        self.transform(&DMat4::from_rotation_x(angle));
    }

    /// Rotates the mesh around the Y axis (radians).
    pub fn rotate_y(&mut self, angle: f64) {
        self.transform(&DMat4::from_rotation_y(angle));
    }

    /// Rotates the mesh around the Z axis (radians).
    pub fn rotate_z(&mut self, angle: f64) {
        self.transform(&DMat4::from_rotation_z(angle));
    }

    /// Merges another mesh into this one without performing CSG.
    ///
    /// Used for print plates and preview assemblies where the solids are
    /// already disjoint.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }
    }

    /// Computes the signed volume of the mesh.
    ///
    /// Positive for a closed mesh with outward-facing triangles. The sum
    /// of signed tetrahedron volumes is exact for closed meshes regardless
    /// of triangulation.
    pub fn volume(&self) -> f64 {
        let mut six_v = 0.0;
        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            six_v += v0.dot(v1.cross(v2));
        }
        six_v / 6.0
    }

    /// Validates triangle indices.
    ///
    /// Returns true if every index refers to an existing vertex and no
    /// triangle repeats a vertex. Zero-area slivers are tolerated; the
    /// boolean pipeline filters them on conversion.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_box;

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_translate() {
        let mut mesh = create_box(DVec3::splat(10.0), true).unwrap();
        mesh.translate(DVec3::new(5.0, 0.0, 0.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.x, 0.0);
        assert_eq!(max.x, 10.0);
    }

    #[test]
    fn test_mesh_rotate_z_keeps_volume() {
        let mut mesh = create_box(DVec3::new(10.0, 20.0, 5.0), true).unwrap();
        let before = mesh.volume();
        mesh.rotate_z(std::f64::consts::FRAC_PI_3);
        let after = mesh.volume();
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn test_mesh_merge() {
        let mut a = create_box(DVec3::splat(10.0), true).unwrap();
        let b = create_box(DVec3::splat(10.0), true).unwrap().translated(DVec3::new(30.0, 0.0, 0.0));
        let tri_a = a.triangle_count();
        a.merge(&b);
        assert_eq!(a.triangle_count(), tri_a + b.triangle_count());
        // Disjoint solids: volumes add up
        assert!((a.volume() - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_cube_volume() {
        let mesh = create_box(DVec3::splat(10.0), false).unwrap();
        assert!((mesh.volume() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }
}
