//! # Polygon for BSP Operations
//!
//! Convex polygon carrying its containing plane.

use super::plane::Plane;
use glam::DVec3;

/// A convex polygon with associated plane.
///
/// Vertices are counter-clockwise when viewed from the front of the
/// plane.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<DVec3>,
    plane: Plane,
}

impl Polygon {
    /// Creates a polygon from vertices.
    ///
    /// Returns None if the vertices are too few or the leading triple is
    /// degenerate.
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Returns the polygon vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the polygon plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Flips the polygon in place (reverses winding and plane).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }
}
