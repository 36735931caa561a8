//! # Plane for BSP Operations
//!
//! Splitting plane with polygon classification, csg.js style: the plane
//! owns the split so the four output bins stay together in one place.

use super::polygon::Polygon;
use glam::DVec3;

/// Epsilon for point-vs-plane classification.
///
/// Looser than the geometric epsilons in `config`: CSG robustness wants
/// near-coplanar faces treated as coplanar rather than split into slivers.
pub(crate) const PLANE_EPSILON: f64 = 1e-5;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// A plane in 3D space defined by unit normal and distance from origin.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Creates a plane from three counter-clockwise points.
    ///
    /// Returns None for collinear points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        if cross.length() < PLANE_EPSILON {
            return None;
        }
        let normal = cross.normalize();
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Returns the plane normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Signed distance from a point to the plane.
    ///
    /// Positive = front, negative = back.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Reverses the plane orientation in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Splits a polygon by this plane into four bins.
    ///
    /// Coplanar polygons land in `coplanar_front`/`coplanar_back` by facing
    /// direction; spanning polygons are cut along the plane and both halves
    /// emitted.
    pub fn split_polygon(
        &self,
        polygon: &Polygon,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let vertices = polygon.vertices();

        let mut polygon_type = COPLANAR;
        let mut types = Vec::with_capacity(vertices.len());
        for v in vertices {
            let distance = self.signed_distance(*v);
            let vertex_type = if distance < -PLANE_EPSILON {
                BACK
            } else if distance > PLANE_EPSILON {
                FRONT
            } else {
                COPLANAR
            };
            polygon_type |= vertex_type;
            types.push(vertex_type);
        }

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(polygon.plane().normal()) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            }
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                let mut front_verts = Vec::with_capacity(vertices.len() + 1);
                let mut back_verts = Vec::with_capacity(vertices.len() + 1);

                for i in 0..vertices.len() {
                    let j = (i + 1) % vertices.len();
                    let (ti, tj) = (types[i], types[j]);
                    let (vi, vj) = (vertices[i], vertices[j]);

                    if ti != BACK {
                        front_verts.push(vi);
                    }
                    if ti != FRONT {
                        back_verts.push(vi);
                    }

                    // Edge crosses the plane: insert the intersection point
                    // into both halves
                    if (ti | tj) == SPANNING {
                        let t = (self.w - self.normal.dot(vi)) / self.normal.dot(vj - vi);
                        let intersection = vi.lerp(vj, t);
                        front_verts.push(intersection);
                        back_verts.push(intersection);
                    }
                }

                if front_verts.len() >= 3 {
                    if let Some(poly) = Polygon::new(front_verts) {
                        front.push(poly);
                    }
                }
                if back_verts.len() >= 3 {
                    if let Some(poly) = Polygon::new(back_verts) {
                        back.push(poly);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::new(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    fn xy_plane() -> Plane {
        Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap()
    }

    #[test]
    fn test_plane_from_points_normal() {
        let plane = xy_plane();
        assert!((plane.normal() - DVec3::Z).length() < PLANE_EPSILON);
    }

    #[test]
    fn test_plane_from_collinear_points() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    }

    #[test]
    fn test_plane_flip() {
        let mut plane = xy_plane();
        plane.flip();
        assert!((plane.normal() + DVec3::Z).length() < PLANE_EPSILON);
        assert!(plane.signed_distance(DVec3::new(0.0, 0.0, 1.0)) < 0.0);
    }

    #[test]
    fn test_split_polygon_front_back() {
        let plane = xy_plane();
        let (mut cf, mut cb, mut f, mut b) = (vec![], vec![], vec![], vec![]);

        plane.split_polygon(&triangle_at(1.0), &mut cf, &mut cb, &mut f, &mut b);
        plane.split_polygon(&triangle_at(-1.0), &mut cf, &mut cb, &mut f, &mut b);

        assert_eq!(f.len(), 1);
        assert_eq!(b.len(), 1);
        assert!(cf.is_empty() && cb.is_empty());
    }

    #[test]
    fn test_split_polygon_coplanar() {
        let plane = xy_plane();
        let (mut cf, mut cb, mut f, mut b) = (vec![], vec![], vec![], vec![]);

        plane.split_polygon(&triangle_at(0.0), &mut cf, &mut cb, &mut f, &mut b);

        assert_eq!(cf.len(), 1);
        assert!(cb.is_empty() && f.is_empty() && b.is_empty());
    }

    #[test]
    fn test_split_polygon_spanning() {
        let plane = xy_plane();
        let spanning = Polygon::new(vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(0.5, 0.0, 1.0),
        ])
        .unwrap();

        let (mut cf, mut cb, mut f, mut b) = (vec![], vec![], vec![], vec![]);
        plane.split_polygon(&spanning, &mut cf, &mut cb, &mut f, &mut b);

        assert!(!f.is_empty(), "should have a front half");
        assert!(!b.is_empty(), "should have a back half");
    }
}
