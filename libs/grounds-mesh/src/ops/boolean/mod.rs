//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry on triangle meshes using BSP trees,
//! following the csg.js algorithm by Evan Wallace:
//!
//! - Union: `a.clip_to(b); b.clip_to(a); b.invert(); b.clip_to(a); b.invert(); combine`
//! - Difference: invert A, union with B, invert the result
//! - Intersection: complement of the union of complements
//!
//! ## Example
//!
//! ```rust
//! use grounds_mesh::{difference, primitives::create_box};
//! use glam::DVec3;
//!
//! let outer = create_box(DVec3::splat(20.0), true).unwrap();
//! let cavity = create_box(DVec3::splat(16.0), true).unwrap();
//! let shell = difference(&outer, &cavity);
//! assert!(!shell.is_empty());
//! ```

mod bsp;
mod plane;
mod polygon;

use crate::mesh::Mesh;
use bsp::BspNode;
use config::constants::MIN_TRIANGLE_AREA;
use polygon::Polygon;

/// Computes the union of two solids.
pub fn union(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return b.clone();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());

    polygons_to_mesh(&result)
}

/// Computes the difference of two solids (A minus B).
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return Mesh::new();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut polys = bsp_a.all_polygons();
    polys.extend(bsp_b.all_polygons());

    // Both trees were built inverted; flipping the collected polygons
    // un-inverts the result without another tree build
    for poly in &mut polys {
        poly.flip();
    }

    polygons_to_mesh(&polys)
}

/// Computes the intersection of two solids.
pub fn intersection(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() || polys_b.is_empty() {
        return Mesh::new();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);

    let mut polys = bsp_a.all_polygons();
    polys.extend(bsp_b.all_polygons());

    for poly in &mut polys {
        poly.flip();
    }

    polygons_to_mesh(&polys)
}

/// Subtracts every cutter from the base solid in turn.
///
/// Convenience for the part generators, which routinely carve a dozen or
/// more features out of one body.
pub fn difference_all<'a, I>(base: &Mesh, cutters: I) -> Mesh
where
    I: IntoIterator<Item = &'a Mesh>,
{
    cutters
        .into_iter()
        .fold(base.clone(), |acc, cutter| difference(&acc, cutter))
}

/// Unions every solid onto the base in turn.
pub fn union_all<'a, I>(base: &Mesh, additions: I) -> Mesh
where
    I: IntoIterator<Item = &'a Mesh>,
{
    additions
        .into_iter()
        .fold(base.clone(), |acc, add| union(&acc, add))
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Converts a mesh into BSP polygons, one per triangle.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    let mut polygons = Vec::with_capacity(mesh.triangle_count());

    for tri in mesh.triangles() {
        let vertices = vec![
            mesh.vertex(tri[0]),
            mesh.vertex(tri[1]),
            mesh.vertex(tri[2]),
        ];
        // Degenerate triangles carry no plane; skip them
        if let Some(poly) = Polygon::new(vertices) {
            polygons.push(poly);
        }
    }

    polygons
}

/// Converts BSP polygons back into a triangle mesh.
///
/// Polygons are fan triangulated; sliver triangles left over from plane
/// clipping are dropped.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();

    for poly in polygons {
        let vertices = poly.vertices();

        for i in 1..vertices.len() - 1 {
            let (a, b, c) = (vertices[0], vertices[i], vertices[i + 1]);

            let area = 0.5 * (b - a).cross(c - a).length();
            if area < MIN_TRIANGLE_AREA {
                continue;
            }

            let i0 = mesh.add_vertex(a);
            let i1 = mesh.add_vertex(b);
            let i2 = mesh.add_vertex(c);
            mesh.add_triangle(i0, i1, i2);
        }
    }

    mesh
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_box, create_cylinder};
    use glam::DVec3;

    #[test]
    fn test_union_disjoint() {
        let a = create_box(DVec3::splat(10.0), true).unwrap();
        let b = create_box(DVec3::splat(10.0), true)
            .unwrap()
            .translated(DVec3::new(30.0, 0.0, 0.0));

        let result = union(&a, &b);
        assert!(result.validate());
        assert!((result.volume() - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_union_overlapping() {
        let a = create_box(DVec3::splat(10.0), true).unwrap();
        let b = create_box(DVec3::splat(10.0), true)
            .unwrap()
            .translated(DVec3::new(5.0, 0.0, 0.0));

        let result = union(&a, &b);
        // Overlap is 5 x 10 x 10 = 500
        assert!((result.volume() - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn test_difference_hollow_shell() {
        let outer = create_box(DVec3::splat(20.0), true).unwrap();
        let cavity = create_box(DVec3::splat(16.0), true).unwrap();

        let shell = difference(&outer, &cavity);
        let expected = 20.0f64.powi(3) - 16.0f64.powi(3);
        assert!((shell.volume() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_difference_disjoint_is_identity() {
        let a = create_box(DVec3::splat(10.0), true).unwrap();
        let b = create_box(DVec3::splat(10.0), true)
            .unwrap()
            .translated(DVec3::new(30.0, 0.0, 0.0));

        let result = difference(&a, &b);
        assert!((result.volume() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_intersection_overlapping() {
        let a = create_box(DVec3::splat(10.0), true).unwrap();
        let b = create_box(DVec3::splat(10.0), true)
            .unwrap()
            .translated(DVec3::new(5.0, 0.0, 0.0));

        let result = intersection(&a, &b);
        assert!((result.volume() - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_intersection_disjoint_is_empty() {
        let a = create_box(DVec3::splat(10.0), true).unwrap();
        let b = create_box(DVec3::splat(10.0), true)
            .unwrap()
            .translated(DVec3::new(30.0, 0.0, 0.0));

        let result = intersection(&a, &b);
        assert!(result.volume().abs() < 1e-6);
    }

    #[test]
    fn test_drilled_plate_volume() {
        // A bore through a plate, the way drain holes are cut: the cutter
        // overshoots both faces
        let plate = create_box(DVec3::new(40.0, 40.0, 4.0), true).unwrap();
        let mut bore = create_cylinder(8.0, 6.0, 48).unwrap();
        bore.translate(DVec3::new(0.0, 0.0, -4.0));

        let drilled = difference(&plate, &bore);
        let n = 48.0f64;
        let bore_area = 0.5 * n * 36.0 * (2.0 * std::f64::consts::PI / n).sin();
        let expected = 40.0 * 40.0 * 4.0 - bore_area * 4.0;
        assert!((drilled.volume() - expected).abs() / expected < 1e-4);
    }

    #[test]
    fn test_union_empty_operands() {
        let a = create_box(DVec3::splat(10.0), true).unwrap();
        let empty = Mesh::new();
        assert!((union(&a, &empty).volume() - 1000.0).abs() < 1e-9);
        assert!((union(&empty, &a).volume() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_difference_all_chain() {
        let plate = create_box(DVec3::new(40.0, 40.0, 4.0), true).unwrap();
        let mut holes = Vec::new();
        for x in [-10.0, 10.0] {
            let mut hole = create_cylinder(8.0, 2.0, 24).unwrap();
            hole.translate(DVec3::new(x, 0.0, -4.0));
            holes.push(hole);
        }

        let drilled = difference_all(&plate, holes.iter());
        assert!(drilled.volume() < plate.volume());
        assert!(drilled.validate());
    }
}
