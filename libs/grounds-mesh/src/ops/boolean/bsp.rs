//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations, following
//! the csg.js algorithm by Evan Wallace.
//!
//! Each node holds a dividing plane, the polygons coplanar with it, and
//! front/back subtrees. The recursion depth is bounded by the BSP depth of
//! the model, which stays shallow for the prismatic solids this kernel
//! builds.

use super::plane::Plane;
use super::polygon::Polygon;

/// A node in the BSP tree.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    /// Dividing plane; None for an empty node
    plane: Option<Plane>,
    /// Polygons coplanar with the dividing plane
    polygons: Vec<Polygon>,
    /// Subtree in front of the plane
    front: Option<Box<BspNode>>,
    /// Subtree behind the plane
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = BspNode::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons into this subtree.
    ///
    /// The first polygon's plane becomes the dividing plane of an empty
    /// node; the rest are partitioned and pushed down.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        if self.plane.is_none() {
            self.plane = Some(*polygons[0].plane());
        }
        let plane = match self.plane {
            Some(plane) => plane,
            None => return,
        };

        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        for polygon in &polygons {
            plane.split_polygon(
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }

        self.polygons.extend(coplanar_front);
        self.polygons.extend(coplanar_back);

        if !front.is_empty() {
            self.front
                .get_or_insert_with(Default::default)
                .build(front);
        }
        if !back.is_empty() {
            self.back.get_or_insert_with(Default::default).build(back);
        }
    }

    /// Converts this tree to its complement (solid ↔ empty space).
    pub fn invert(&mut self) {
        for polygon in &mut self.polygons {
            polygon.flip();
        }
        if let Some(plane) = &mut self.plane {
            plane.flip();
        }
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Removes the parts of `polygons` that are inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let plane = match self.plane {
            Some(plane) => plane,
            None => return polygons,
        };

        let mut front = Vec::new();
        let mut back = Vec::new();
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();

        for polygon in &polygons {
            plane.split_polygon(
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }
        // Coplanar polygons travel with the side they face
        front.extend(coplanar_front);
        back.extend(coplanar_back);

        let mut result = match &self.front {
            Some(node) => node.clip_polygons(front),
            None => front,
        };

        if let Some(node) = &self.back {
            result.extend(node.clip_polygons(back));
        }
        // No back subtree: back polygons are inside the solid, discard

        result
    }

    /// Clips this tree's polygons to the complement of `other`'s solid.
    pub fn clip_to(&mut self, other: &BspNode) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// Collects all polygons in this tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = self.polygons.clone();
        if let Some(front) = &self.front {
            result.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            result.extend(back.all_polygons());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::new(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspNode::new(vec![]);
        assert!(tree.all_polygons().is_empty());
    }

    #[test]
    fn test_bsp_collects_all_polygons() {
        let tree = BspNode::new(vec![
            triangle_at(0.0),
            triangle_at(1.0),
            triangle_at(-1.0),
        ]);
        assert_eq!(tree.all_polygons().len(), 3);
    }

    #[test]
    fn test_bsp_invert_flips_normals() {
        let mut tree = BspNode::new(vec![triangle_at(0.0)]);
        let before = tree.all_polygons()[0].plane().normal();
        tree.invert();
        let after = tree.all_polygons()[0].plane().normal();
        assert!((before + after).length() < 1e-9);
    }

    #[test]
    fn test_bsp_clip_front_survives() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        let result = tree.clip_polygons(vec![triangle_at(1.0)]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_bsp_clip_back_removed() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        let result = tree.clip_polygons(vec![triangle_at(-1.0)]);
        assert!(result.is_empty());
    }
}
