//! # Segmented Helical Threads
//!
//! Printable threads built the way the container parts have always been
//! threaded: short rectangular segments stepped along a helix. Coarse,
//! tolerant of layer lines, and cheap to regenerate.
//!
//! Segments at practical pitches never touch each other, so each helper
//! returns a single merged mesh: one union (ridges) or one cut (grooves)
//! applies the whole thread.

use glam::DVec3;
use grounds_mesh::{primitives::create_box, Mesh, MeshError};

/// Radial height of an external ridge segment.
const RIDGE_DEPTH: f64 = 1.8;
/// Tangential width of an external ridge segment.
const RIDGE_WIDTH: f64 = 1.0;
/// Radial depth of an internal groove segment.
const GROOVE_DEPTH: f64 = 1.2;
/// How far a groove segment reaches into the bore to stay connected to it.
const GROOVE_BORE_OVERLAP: f64 = 0.2;

/// Builds one thread segment: a small box at `radius` from the +Z axis,
/// rotated to `angle_deg`, centered at height `z`.
fn segment(
    size: DVec3,
    radius: f64,
    angle_deg: f64,
    z: f64,
) -> Result<Mesh, MeshError> {
    let mut seg = create_box(size, true)?;
    seg.translate(DVec3::new(radius, 0.0, 0.0));
    seg.rotate_z(angle_deg.to_radians());
    seg.translate(DVec3::new(0.0, 0.0, z));
    Ok(seg)
}

/// External thread ridges for a shaft along +Z starting at z=0.
///
/// Union the result onto a shaft of radius `major_diameter / 2 - 0.5`.
pub fn external_ridges(
    major_diameter: f64,
    pitch: f64,
    length: f64,
    segments_per_turn: u32,
) -> Result<Mesh, MeshError> {
    if pitch <= 0.0 || length <= pitch {
        return Err(MeshError::degenerate(format!(
            "thread length {} must exceed pitch {}",
            length, pitch
        )));
    }

    let radius = major_diameter / 2.0 - RIDGE_DEPTH / 2.0;
    let size = DVec3::new(RIDGE_DEPTH, RIDGE_WIDTH, pitch * 0.4);

    let mut ridges = Mesh::new();
    for_each_segment(pitch, length, segments_per_turn, |angle_deg, z| {
        let seg = segment(size, radius, angle_deg, z)?;
        ridges.merge(&seg);
        Ok(())
    })?;

    Ok(ridges)
}

/// Internal thread grooves around a bore along +Z starting at z=0.
///
/// Cut the result from a boss whose bore has the given diameter; each
/// segment overlaps slightly into the bore so the groove opens into it.
pub fn internal_grooves(
    bore_diameter: f64,
    pitch: f64,
    length: f64,
    segments_per_turn: u32,
) -> Result<Mesh, MeshError> {
    if pitch <= 0.0 || length <= pitch {
        return Err(MeshError::degenerate(format!(
            "thread length {} must exceed pitch {}",
            length, pitch
        )));
    }

    let radius = bore_diameter / 2.0 + GROOVE_DEPTH / 2.0 - GROOVE_BORE_OVERLAP;
    let size = DVec3::new(GROOVE_DEPTH, pitch * 0.4, pitch * 0.35);

    let mut grooves = Mesh::new();
    for_each_segment(pitch, length, segments_per_turn, |angle_deg, z| {
        let seg = segment(size, radius, angle_deg, z)?;
        grooves.merge(&seg);
        Ok(())
    })?;

    Ok(grooves)
}

/// Steps a helix at `segments_per_turn` stops per revolution, skipping the
/// run-out near the thread end.
fn for_each_segment<F>(
    pitch: f64,
    length: f64,
    segments_per_turn: u32,
    mut f: F,
) -> Result<(), MeshError>
where
    F: FnMut(f64, f64) -> Result<(), MeshError>,
{
    let turns = (length / pitch) as u32;
    let step = 360.0 / segments_per_turn as f64;

    for turn in 0..turns {
        for seg in 0..segments_per_turn {
            let index = (turn * segments_per_turn + seg) as f64;
            let angle_deg = index * step;
            let z = turn as f64 * pitch + (seg as f64 / segments_per_turn as f64) * pitch;

            if z < length - pitch / 3.0 {
                f(angle_deg, z)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_ridges_merged() {
        let ridges = external_ridges(16.0, 3.0, 18.0, 8).unwrap();
        assert!(ridges.validate());
        assert!(!ridges.is_empty());
        // 12 triangles per box segment
        assert_eq!(ridges.triangle_count() % 12, 0);
    }

    #[test]
    fn test_ridges_stay_within_length() {
        let ridges = external_ridges(16.0, 3.0, 18.0, 8).unwrap();
        let (min, max) = ridges.bounding_box();
        assert!(min.z > -1.0);
        assert!(max.z < 18.0);
    }

    #[test]
    fn test_ridges_radial_extent() {
        let ridges = external_ridges(16.0, 3.0, 18.0, 8).unwrap();
        let (_, max) = ridges.bounding_box();
        // Outermost corner reaches the major radius
        assert!(max.x <= 16.0 / 2.0 + 1e-9);
        assert!(max.x > 16.0 / 2.0 - 1.0);
    }

    #[test]
    fn test_internal_grooves_reach_into_bore() {
        let grooves = internal_grooves(14.0, 3.0, 20.0, 6).unwrap();
        assert!(grooves.validate());
        let (min, _) = grooves.bounding_box();
        // Segments must cross the bore wall at radius 7
        assert!(min.x < 0.0 || !grooves.is_empty());
    }

    #[test]
    fn test_thread_shorter_than_pitch_rejected() {
        assert!(external_ridges(16.0, 3.0, 2.0, 8).is_err());
        assert!(internal_grooves(14.0, 3.0, 1.0, 6).is_err());
    }

    #[test]
    fn test_determinism() {
        let a = external_ridges(16.0, 3.0, 18.0, 8).unwrap();
        let b = external_ridges(16.0, 3.0, 18.0, 8).unwrap();
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.triangles(), b.triangles());
    }
}
