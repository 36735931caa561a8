//! # 2D Profiles
//!
//! Convex 2D outlines in the XY plane, counter-clockwise, used as input
//! to extrusion and lofting. Convexity is what lets the caps be fan
//! triangulated without an ear-clipping pass.

use crate::error::MeshError;
use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec2;
use std::f64::consts::PI;

/// A convex 2D outline, counter-clockwise, centered on the origin.
#[derive(Debug, Clone)]
pub struct Profile {
    points: Vec<DVec2>,
}

impl Profile {
    /// Creates a profile from pre-built points.
    ///
    /// Winding is normalized to counter-clockwise; callers are responsible
    /// for convexity.
    pub fn from_points(points: Vec<DVec2>) -> Result<Self, MeshError> {
        if points.len() < 3 {
            return Err(MeshError::invalid_profile(format!(
                "profile needs at least 3 points, got {}",
                points.len()
            )));
        }
        let mut profile = Self { points };
        if profile.area() < 0.0 {
            profile.points.reverse();
        }
        Ok(profile)
    }

    /// Axis-aligned rectangle centered on the origin.
    pub fn rectangle(size: DVec2) -> Result<Self, MeshError> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(MeshError::invalid_profile(format!(
                "rectangle size must be positive: {:?}",
                size
            )));
        }

        let half = size / 2.0;
        Ok(Self {
            points: vec![
                DVec2::new(-half.x, -half.y),
                DVec2::new(half.x, -half.y),
                DVec2::new(half.x, half.y),
                DVec2::new(-half.x, half.y),
            ],
        })
    }

    /// Rectangle with circular corner fillets, centered on the origin.
    ///
    /// This is how vertical-edge fillets of the container parts are
    /// modeled: the rounded outline is extruded instead of filleting the
    /// prism afterwards.
    ///
    /// # Arguments
    ///
    /// * `size` - Overall [x, y] dimensions
    /// * `radius` - Corner fillet radius
    /// * `corner_segments` - Arc segments per 90 degree corner
    pub fn rounded_rectangle(
        size: DVec2,
        radius: f64,
        corner_segments: u32,
    ) -> Result<Self, MeshError> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(MeshError::invalid_profile(format!(
                "rectangle size must be positive: {:?}",
                size
            )));
        }
        if radius < 0.0 {
            return Err(MeshError::invalid_profile(format!(
                "corner radius must be non-negative: {}",
                radius
            )));
        }
        if 2.0 * radius >= size.x.min(size.y) {
            return Err(MeshError::invalid_profile(format!(
                "corner radius {} too large for {:?}",
                radius, size
            )));
        }
        if radius == 0.0 {
            return Self::rectangle(size);
        }
        if corner_segments == 0 {
            return Err(MeshError::invalid_profile(
                "corner_segments must be at least 1",
            ));
        }

        let half = size / 2.0;
        // Corner arc centers, in CCW order starting from the (+x, -y) corner
        let centers = [
            (DVec2::new(half.x - radius, -half.y + radius), -0.5 * PI),
            (DVec2::new(half.x - radius, half.y - radius), 0.0),
            (DVec2::new(-half.x + radius, half.y - radius), 0.5 * PI),
            (DVec2::new(-half.x + radius, -half.y + radius), PI),
        ];

        let mut points = Vec::with_capacity(4 * (corner_segments as usize + 1));
        for (center, start_angle) in centers {
            for i in 0..=corner_segments {
                let theta = start_angle + 0.5 * PI * i as f64 / corner_segments as f64;
                points.push(center + radius * DVec2::new(theta.cos(), theta.sin()));
            }
        }

        Ok(Self { points })
    }

    /// Circle approximated by `segments` chords.
    pub fn circle(radius: f64, segments: u32) -> Result<Self, MeshError> {
        if radius <= 0.0 {
            return Err(MeshError::invalid_profile(format!(
                "circle radius must be positive: {}",
                radius
            )));
        }
        Self::regular_polygon(segments, radius)
    }

    /// Regular polygon with the given circumradius.
    ///
    /// The first vertex lies on the +X axis. Used directly for hex grips
    /// (`sides = 6`) and as the tessellation of circles.
    pub fn regular_polygon(sides: u32, circumradius: f64) -> Result<Self, MeshError> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&sides) {
            return Err(MeshError::invalid_profile(format!(
                "side count {} outside [{}, {}]",
                sides, MIN_SEGMENTS, MAX_SEGMENTS
            )));
        }
        if circumradius <= 0.0 {
            return Err(MeshError::invalid_profile(format!(
                "circumradius must be positive: {}",
                circumradius
            )));
        }

        let points = (0..sides)
            .map(|i| {
                let theta = 2.0 * PI * i as f64 / sides as f64;
                circumradius * DVec2::new(theta.cos(), theta.sin())
            })
            .collect();

        Ok(Self { points })
    }

    /// Returns the outline points.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the number of outline points.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns a uniformly scaled copy.
    pub fn scaled(&self, factor: DVec2) -> Profile {
        Profile {
            points: self.points.iter().map(|p| *p * factor).collect(),
        }
    }

    /// Enclosed area via the shoelace formula (positive for CCW outlines).
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice_area += a.x * b.y - b.x * a.y;
        }
        twice_area / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area() {
        let p = Profile::rectangle(DVec2::new(10.0, 20.0)).unwrap();
        assert_eq!(p.vertex_count(), 4);
        assert!((p.area() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_rectangle_invalid() {
        assert!(Profile::rectangle(DVec2::new(0.0, 5.0)).is_err());
    }

    #[test]
    fn test_rounded_rectangle_area() {
        // Area = full rect - 4 corner squares + 4 quarter arcs
        let p = Profile::rounded_rectangle(DVec2::new(20.0, 10.0), 2.0, 16).unwrap();
        let exact = 20.0 * 10.0 - (4.0 - PI) * 2.0 * 2.0;
        assert!((p.area() - exact).abs() < 0.05);
        assert!(p.area() < 200.0);
    }

    #[test]
    fn test_rounded_rectangle_radius_too_large() {
        assert!(Profile::rounded_rectangle(DVec2::new(10.0, 10.0), 5.0, 8).is_err());
    }

    #[test]
    fn test_rounded_rectangle_zero_radius_degrades() {
        let p = Profile::rounded_rectangle(DVec2::new(10.0, 10.0), 0.0, 8).unwrap();
        assert_eq!(p.vertex_count(), 4);
    }

    #[test]
    fn test_circle_area_converges() {
        let p = Profile::circle(5.0, 96).unwrap();
        let exact = PI * 25.0;
        assert!((p.area() - exact) / exact > -0.01);
        assert!(p.area() < exact);
    }

    #[test]
    fn test_circle_too_few_segments() {
        assert!(Profile::circle(5.0, 2).is_err());
    }

    #[test]
    fn test_hexagon_is_ccw() {
        let p = Profile::regular_polygon(6, 10.4).unwrap();
        assert_eq!(p.vertex_count(), 6);
        assert!(p.area() > 0.0);
    }

    #[test]
    fn test_from_points_normalizes_winding() {
        let clockwise = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 0.0),
        ];
        let p = Profile::from_points(clockwise).unwrap();
        assert!(p.area() > 0.0);
    }

    #[test]
    fn test_scaled() {
        let p = Profile::rectangle(DVec2::new(10.0, 10.0)).unwrap();
        let s = p.scaled(DVec2::splat(2.0));
        assert!((s.area() - 400.0).abs() < 1e-9);
    }
}
