//! # Drain Spout and Seal Ring
//!
//! Threaded compression fitting for TPU printing: hex grip and circular
//! flange with a gasket groove, externally threaded shaft, spout tube
//! with funnel entry and angled drip tip. The seal ring is the separate
//! TPU gasket that sits in the flange groove.

use crate::dimensions::Dimensions;
use crate::error::PartError;
use crate::parts::rest_on_bed;
use crate::solid::NamedSolid;
use crate::threads;
use config::constants::DEFAULT_SEGMENTS;
use glam::DVec3;
use grounds_mesh::primitives::{create_box, create_cylinder, create_frustum, create_tube};
use grounds_mesh::{difference, difference_all, extrude, union, union_all, Mesh, Profile};

/// Overshoot for cutters piercing a face.
const CUT_OVERSHOOT: f64 = 0.5;
/// Fusion overlap where solids meet.
const FUSE_OVERLAP: f64 = 0.3;
/// Depth of the funnel countersink at the shaft entrance.
const FUNNEL_DEPTH: f64 = 4.0;
/// Extra radius of the funnel mouth over the bore.
const FUNNEL_FLARE: f64 = 3.0;
/// Drip tip cut angle, degrees off the tube axis.
const DRIP_ANGLE_DEG: f64 = 20.0;

pub fn generate(dims: &Dimensions) -> Result<Vec<NamedSolid>, PartError> {
    let mut spout = spout_body(dims)?;

    // Print orientation: flange on the bed, shaft pointing up
    spout.rotate_x(std::f64::consts::PI);
    rest_on_bed(&mut spout);

    let seal_ring = seal_ring(dims)?;

    Ok(vec![
        NamedSolid::new("drain_spout", spout),
        NamedSolid::new("seal_ring", seal_ring),
    ])
}

/// Builds the spout in installed orientation: z=0 at the wall contact
/// face, threaded shaft along +Z into the boss, tube along -Z.
pub(crate) fn spout_body(dims: &Dimensions) -> Result<Mesh, PartError> {
    // Hex grip and circular compression flange
    let hex_profile = Profile::regular_polygon(6, dims.hex_size / 2.0)?;
    let mut hex = extrude(&hex_profile, dims.hex_thickness)?;
    hex.translate(DVec3::new(0.0, 0.0, -dims.hex_thickness));

    let mut flange = create_cylinder(
        dims.flange_thickness,
        dims.flange_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    flange.translate(DVec3::new(0.0, 0.0, -dims.flange_thickness));

    let grip = union(&hex, &flange);

    // Gasket groove in the wall-contact face
    let mut groove = create_tube(
        dims.seal_groove_depth + CUT_OVERSHOOT,
        (dims.seal_groove_diameter + dims.seal_groove_width) / 2.0,
        dims.seal_groove_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    groove.translate(DVec3::new(0.0, 0.0, -dims.seal_groove_depth));
    let grip = difference(&grip, &groove);

    // Threaded shaft, slightly undersized so the ridges carry the fit
    let mut shaft = create_cylinder(
        dims.thread_length_spout + FUSE_OVERLAP,
        dims.thread_major_diameter / 2.0 - 0.5,
        DEFAULT_SEGMENTS,
    )?;
    shaft.translate(DVec3::new(0.0, 0.0, -FUSE_OVERLAP));

    let ridges = threads::external_ridges(
        dims.thread_major_diameter,
        dims.thread_pitch,
        dims.thread_length_spout,
        8,
    )?;
    let shaft = union(&shaft, &ridges);

    // Spout tube reaching the sink
    let mut tube = create_cylinder(
        dims.spout_length + FUSE_OVERLAP,
        dims.spout_outer_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    tube.translate(DVec3::new(
        0.0,
        0.0,
        -(dims.spout_length + dims.flange_thickness),
    ));

    let body = union_all(&grip, [&shaft, &tube]);

    // Through bore for liquid flow
    let bore_length =
        dims.spout_length + dims.flange_thickness + dims.thread_length_spout + 2.0 * CUT_OVERSHOOT;
    let mut bore = create_cylinder(
        bore_length,
        dims.spout_inner_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    bore.translate(DVec3::new(
        0.0,
        0.0,
        -(dims.spout_length + dims.flange_thickness + CUT_OVERSHOOT),
    ));

    // Funnel countersink at the shaft entrance to catch liquid
    let mut funnel = create_frustum(
        FUNNEL_DEPTH + CUT_OVERSHOOT,
        dims.spout_inner_diameter / 2.0,
        dims.spout_inner_diameter / 2.0 + FUNNEL_FLARE,
        DEFAULT_SEGMENTS,
    )?;
    funnel.translate(DVec3::new(0.0, 0.0, dims.thread_length_spout - FUNNEL_DEPTH));

    // Angled drip tip at the tube end
    let slab = dims.spout_outer_diameter + 10.0;
    let mut drip = create_box(DVec3::new(slab, slab, 10.0), true)?;
    drip.rotate_x(DRIP_ANGLE_DEG.to_radians());
    drip.translate(DVec3::new(
        0.0,
        0.0,
        -(dims.spout_length + dims.flange_thickness),
    ));

    Ok(difference_all(&body, [&bore, &funnel, &drip]))
}

/// TPU gasket ring, slightly thicker than the groove so it compresses.
pub(crate) fn seal_ring(dims: &Dimensions) -> Result<Mesh, PartError> {
    let ring = create_tube(
        dims.seal_groove_depth + 0.5,
        (dims.seal_groove_diameter + dims.seal_groove_width) / 2.0,
        dims.seal_groove_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spout_names() {
        let solids = generate(&Dimensions::default()).unwrap();
        assert_eq!(solids.len(), 2);
        assert_eq!(solids[0].name, "drain_spout");
        assert_eq!(solids[1].name, "seal_ring");
    }

    #[test]
    fn test_spout_overall_length() {
        let dims = Dimensions::default();
        let solids = generate(&dims).unwrap();
        let (min, max) = solids[0].mesh.bounding_box();
        let expected = dims.spout_length + dims.flange_thickness + dims.thread_length_spout;
        assert!(min.z.abs() < 1e-9, "spout must rest on the bed");
        // The angled drip cut shortens one side of the tube tip
        let height = max.z - min.z;
        assert!(height <= expected + 1e-6);
        assert!(height >= expected - 10.0);
    }

    #[test]
    fn test_spout_flange_sets_footprint() {
        let dims = Dimensions::default();
        let solids = generate(&dims).unwrap();
        let (min, max) = solids[0].mesh.bounding_box();
        assert!((max.x - min.x - dims.flange_diameter).abs() < 0.1);
    }

    #[test]
    fn test_seal_ring_dimensions() {
        let dims = Dimensions::default();
        let solids = generate(&dims).unwrap();
        let (min, max) = solids[1].mesh.bounding_box();
        let outer = dims.seal_groove_diameter + dims.seal_groove_width;
        assert!((max.x - min.x - outer).abs() < 0.01);
        assert!((max.z - min.z - dims.seal_groove_depth - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_spout_has_bore() {
        // The bore must remove material: compare against a boreless build
        let dims = Dimensions::default();
        let spout_solids = generate(&dims).unwrap();
        let spout = &spout_solids[0].mesh;
        let tube_wall = (dims.spout_outer_diameter - dims.spout_inner_diameter) / 2.0;
        assert!(tube_wall > 0.0);
        // A solid spout of these dims would exceed this volume comfortably
        let solid_tube = std::f64::consts::PI
            * (dims.spout_outer_diameter / 2.0).powi(2)
            * dims.spout_length;
        assert!(spout.volume() < solid_tube * 2.0);
        assert!(spout.volume() > 0.0);
    }

    #[test]
    fn test_spout_idempotent() {
        let dims = Dimensions::default();
        let a_solids = generate(&dims).unwrap();
        let a = &a_solids[0].mesh;
        let b_solids = generate(&dims).unwrap();
        let b = &b_solids[0].mesh;
        assert_eq!(a.vertices(), b.vertices());
    }
}
