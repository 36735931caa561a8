//! # Lid and Capsule Scraper
//!
//! The lid: rounded top plate, recess block that seats inside the box
//! opening, lofted hollow handle with the scraper storage groove, and the
//! bayonet socket carved into the recess underside.
//!
//! The capsule scraper is the matching twist-lock part: a nail-insert
//! base (press-fit holes for 1.5 mm brad nails) on a bayonet shaft.

use crate::dimensions::Dimensions;
use crate::error::PartError;
use crate::parts::{cylinder_x, rest_on_bed};
use crate::solid::NamedSolid;
use config::constants::{CORNER_SEGMENTS, DEFAULT_SEGMENTS};
use glam::{DVec2, DVec3};
use grounds_mesh::primitives::{create_box, create_cylinder, create_frustum, create_rounded_box};
use grounds_mesh::{difference, difference_all, loft, union, union_all, Mesh, MeshError, Profile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed for the semi-random nail ring. Fixed so regeneration is
/// byte-identical.
const NAIL_SEED: u64 = 42;
/// Overshoot for cutters piercing a face.
const CUT_OVERSHOOT: f64 = 0.5;
/// Fusion overlap where solids meet.
const FUSE_OVERLAP: f64 = 0.3;
/// Angular step when sweeping the horizontal bayonet lock groove.
const LOCK_SWEEP_STEP_DEG: f64 = 12.0;

pub fn generate(dims: &Dimensions) -> Result<Vec<NamedSolid>, PartError> {
    let mut lid = lid_body(dims)?;
    rest_on_bed(&mut lid);

    let mut scraper = capsule_scraper(dims)?;
    rest_on_bed(&mut scraper);

    Ok(vec![
        NamedSolid::new("lid", lid),
        NamedSolid::new("lid_scraper", scraper),
    ])
}

// =============================================================================
// LID
// =============================================================================

/// Bottom of the recess block in lid-local coordinates (plate centered on
/// the origin).
fn recess_bottom_z(dims: &Dimensions) -> f64 {
    -dims.lid_top_thickness / 2.0 - dims.recess_depth + dims.recess_overlap
}

fn lid_body(dims: &Dimensions) -> Result<Mesh, PartError> {
    // Top plate, same footprint and fillet as the box
    let plate = create_rounded_box(
        DVec3::new(dims.box_length, dims.box_width, dims.lid_top_thickness),
        dims.fillet_radius,
        CORNER_SEGMENTS,
        true,
    )?;

    // Recess block that slots inside the box opening
    let recess_length = dims.interior_length() - 2.0 * dims.recess_clearance;
    let recess_width = dims.interior_width() - 2.0 * dims.recess_clearance;
    let mut recess = create_rounded_box(
        DVec3::new(recess_length, recess_width, dims.recess_depth),
        dims.lid_recess_fillet,
        CORNER_SEGMENTS,
        true,
    )?;
    recess.translate(DVec3::new(
        0.0,
        0.0,
        -(dims.lid_top_thickness + dims.recess_depth) / 2.0 + dims.recess_overlap,
    ));

    let body = union(&plate, &recess);

    // Handle on top
    let body = union(&body, &handle(dims)?);

    // Storage groove runs through the handle; its floor (and the ridge
    // slot) reach into the plate top, so both cut the assembled body.
    // The groove trough and the bayonet socket never overlap, so one
    // merged cutter suffices.
    let mut cutter = groove_cutter(dims)?;
    cutter.merge(&socket_cutter(dims)?);
    Ok(difference(&body, &cutter))
}

/// Ergonomic hollow handle: lofted outer shell minus lofted inner cavity.
fn handle(dims: &Dimensions) -> Result<Mesh, MeshError> {
    let base_z = dims.lid_top_thickness / 2.0 - FUSE_OVERLAP;
    let length = dims.handle_length;
    let width = dims.handle_width;
    let height = dims.handle_height;
    let t = dims.handle_thickness;

    // Narrow at the grip, slightly wider at the top
    let outer = loft(&[
        (Profile::rectangle(DVec2::new(length, width))?, base_z),
        (
            Profile::rectangle(DVec2::new(length - t, width * 0.6))?,
            base_z + height * 0.5,
        ),
        (
            Profile::rectangle(DVec2::new(length - 2.0 * t, width * 0.75))?,
            base_z + height,
        ),
    ])?;

    let inner = loft(&[
        (
            Profile::rectangle(DVec2::new(length - 2.0 * t, width - 2.0 * t))?,
            base_z + t,
        ),
        (
            Profile::rectangle(DVec2::new(length - 3.0 * t, width * 0.6 - 2.0 * t))?,
            base_z + height * 0.5,
        ),
        (
            Profile::rectangle(DVec2::new(length - 4.0 * t, width * 0.75 - 2.0 * t))?,
            base_z + height + 2.0 * CUT_OVERSHOOT,
        ),
    ])?;

    Ok(difference(&outer, &inner))
}

/// Storage groove trough plus the ridge slot under it, as one cutter.
///
/// The groove is an open trough along the handle for the scraper shaft;
/// its floor dips slightly into the plate. The slot below it accepts the
/// scraper's friction ridge.
fn groove_cutter(dims: &Dimensions) -> Result<Mesh, MeshError> {
    let base_z = dims.lid_top_thickness / 2.0 - FUSE_OVERLAP;
    let groove_radius = dims.storage_groove_diameter / 2.0;
    let groove_x = -dims.handle_length / 2.0 + 5.0;
    let groove_z = base_z + dims.handle_height * 0.6;

    let mut groove = cylinder_x(dims.storage_groove_length, groove_radius, DEFAULT_SEGMENTS)?;
    groove.translate(DVec3::new(groove_x, 0.0, groove_z));

    let slot_length = dims.storage_groove_length - 4.0;
    let mut slot = create_box(
        DVec3::new(
            slot_length,
            dims.ridge_slot_width,
            dims.ridge_slot_depth + groove_radius,
        ),
        true,
    )?;
    // Hangs from the groove axis so it pierces the trough floor by
    // ridge_slot_depth
    slot.translate(DVec3::new(
        groove_x + 2.0 + slot_length / 2.0,
        0.0,
        groove_z - (dims.ridge_slot_depth + groove_radius) / 2.0,
    ));

    Ok(union(&groove, &slot))
}

/// One cutter solid for the whole bayonet socket: cavity cylinder, three
/// vertical entry slots, and the swept horizontal lock grooves.
fn socket_cutter(dims: &Dimensions) -> Result<Mesh, MeshError> {
    let floor_z = recess_bottom_z(dims);
    let slot_radius = dims.scraper_shaft_diameter / 2.0 + dims.bayonet_tab_protrusion / 2.0;

    let mut cavity = create_cylinder(
        dims.scraper_socket_depth + CUT_OVERSHOOT,
        dims.scraper_socket_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    cavity.translate(DVec3::new(0.0, 0.0, floor_z - CUT_OVERSHOOT));

    let mut cutters: Vec<Mesh> = Vec::new();
    let tab_count = dims.bayonet_tab_count.max(1);
    for i in 0..tab_count {
        let slot_angle = i as f64 * 360.0 / tab_count as f64 + dims.bayonet_rotation_angle;

        // Vertical entry slot
        let mut entry = create_box(
            DVec3::new(
                dims.bayonet_tab_protrusion + 2.0 * FUSE_OVERLAP,
                dims.bayonet_slot_width,
                dims.bayonet_slot_vertical + CUT_OVERSHOOT,
            ),
            true,
        )?;
        entry.translate(DVec3::new(
            slot_radius,
            0.0,
            floor_z + (dims.bayonet_slot_vertical - CUT_OVERSHOOT) / 2.0,
        ));
        entry.rotate_z(slot_angle.to_radians());
        cutters.push(entry);

        // Horizontal lock groove, swept in short rotated steps back toward
        // the tab's resting angle
        let sweep_start = slot_angle - dims.bayonet_rotation_angle - 10.0;
        let sweep_end = slot_angle + 10.0;
        let mut angle = sweep_start;
        while angle <= sweep_end {
            let mut lock = create_box(
                DVec3::new(
                    dims.bayonet_tab_protrusion + 2.0 * FUSE_OVERLAP,
                    dims.bayonet_slot_width,
                    dims.bayonet_lock_depth,
                ),
                true,
            )?;
            lock.translate(DVec3::new(
                slot_radius,
                0.0,
                floor_z + dims.bayonet_slot_vertical - dims.bayonet_lock_depth / 2.0,
            ));
            lock.rotate_z(angle.to_radians());
            cutters.push(lock);
            angle += LOCK_SWEEP_STEP_DEG;
        }
    }

    Ok(union_all(&cavity, cutters.iter()))
}

// =============================================================================
// CAPSULE SCRAPER
// =============================================================================

/// Nail-hole centers, semi-random within the allowed ring.
///
/// Roughly even angular spread with seeded jitter; the radius of every
/// center stays strictly inside `[nail_ring_min_radius, nail_ring_max_radius)`.
pub(crate) fn nail_positions(dims: &Dimensions) -> Vec<DVec2> {
    let mut rng = StdRng::seed_from_u64(NAIL_SEED);
    let min_r = dims.nail_ring_min_radius();
    let max_r = dims.nail_ring_max_radius();

    (0..dims.pin_count)
        .map(|i| {
            let radius = rng.gen_range(min_r..max_r);
            let base_angle = i as f64 / dims.pin_count as f64 * 360.0;
            let angle = (base_angle + rng.gen_range(-20.0..20.0)).to_radians();
            radius * DVec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Scraper base with bayonet shaft up and nail holes down.
///
/// Local coordinates: base top face at z=0, base and reinforcement below,
/// shaft and tabs above.
fn capsule_scraper(dims: &Dimensions) -> Result<Mesh, PartError> {
    let base_thickness = dims.scraper_base_total_thickness();

    let mut base = create_cylinder(
        base_thickness,
        dims.scraper_base_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    base.translate(DVec3::new(0.0, 0.0, -base_thickness));

    // Bayonet shaft, buried slightly into the base for fusion
    let mut shaft = create_cylinder(
        dims.scraper_shaft_height + dims.scraper_boss_overlap,
        dims.scraper_shaft_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    shaft.translate(DVec3::new(0.0, 0.0, -dims.scraper_boss_overlap));

    // Three lock tabs at 120 degrees, aligned with the entry slot tops
    let shaft_radius = dims.scraper_shaft_diameter / 2.0;
    let tab_count = dims.bayonet_tab_count.max(1);
    let mut tabs: Vec<Mesh> = Vec::new();
    for i in 0..tab_count {
        let angle = (i as f64 * 360.0 / tab_count as f64).to_radians();
        let mut tab = create_box(
            DVec3::new(
                dims.bayonet_tab_protrusion + 2.0 * FUSE_OVERLAP,
                dims.bayonet_tab_height,
                dims.bayonet_tab_length,
            ),
            true,
        )?;
        tab.translate(DVec3::new(
            shaft_radius + dims.bayonet_tab_protrusion / 2.0 - FUSE_OVERLAP,
            0.0,
            dims.bayonet_slot_vertical,
        ));
        tab.rotate_z(angle);
        tabs.push(tab);
    }

    let body = union(&base, &union_all(&shaft, tabs.iter()));

    // Nail holes: head socket, taper, press-fit through-hole
    let mut body = body;
    for center in nail_positions(dims) {
        let socket_r = dims.nail_socket_diameter / 2.0;
        let hole_r = dims.nail_hole_diameter / 2.0;

        let mut socket = create_cylinder(
            dims.nail_socket_depth + CUT_OVERSHOOT,
            socket_r,
            DEFAULT_SEGMENTS / 2,
        )?;
        socket.translate(DVec3::new(center.x, center.y, -dims.nail_socket_depth));

        // Taper from socket down to the press-fit hole; the top overshoot
        // lands inside the socket cut
        let mut taper = create_frustum(
            dims.nail_taper_length + FUSE_OVERLAP,
            hole_r,
            socket_r,
            DEFAULT_SEGMENTS / 2,
        )?;
        taper.translate(DVec3::new(
            center.x,
            center.y,
            -dims.nail_socket_depth - dims.nail_taper_length,
        ));

        let mut hole = create_cylinder(
            dims.nail_through_length() + FUSE_OVERLAP,
            hole_r,
            DEFAULT_SEGMENTS / 2,
        )?;
        hole.translate(DVec3::new(
            center.x,
            center.y,
            -dims.nail_socket_depth - dims.nail_taper_length - dims.nail_through_length()
                + FUSE_OVERLAP,
        ));

        body = difference_all(&body, [&socket, &taper, &hole]);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lid_names_and_bounds() {
        let dims = Dimensions::default();
        let solids = generate(&dims).unwrap();
        assert_eq!(solids.len(), 2);
        assert_eq!(solids[0].name, "lid");
        assert_eq!(solids[1].name, "lid_scraper");

        let (min, max) = solids[0].mesh.bounding_box();
        assert!((max.x - min.x - dims.box_length).abs() < 0.01);
        assert!((max.y - min.y - dims.box_width).abs() < 0.01);
        assert!(min.z.abs() < 1e-9);
    }

    #[test]
    fn test_nail_positions_stay_in_ring() {
        let dims = Dimensions::default();
        let min_r = dims.nail_ring_min_radius();
        let max_r = dims.nail_ring_max_radius();
        let shaft_r = dims.scraper_shaft_diameter / 2.0;

        let positions = nail_positions(&dims);
        assert_eq!(positions.len(), dims.pin_count as usize);
        for p in positions {
            let r = p.length();
            assert!(r >= min_r, "nail at {r:.2} inside the shaft clearance");
            assert!(r < max_r, "nail at {r:.2} outside the ring");
            assert!(r > shaft_r, "nail at {r:.2} collides with the shaft");
        }
    }

    #[test]
    fn test_nail_positions_deterministic() {
        let dims = Dimensions::default();
        assert_eq!(nail_positions(&dims), nail_positions(&dims));
    }

    #[test]
    fn test_scraper_height() {
        let dims = Dimensions::default();
        let solids = generate(&dims).unwrap();
        let (min, max) = solids[1].mesh.bounding_box();
        let expected = dims.scraper_base_total_thickness() + dims.scraper_shaft_height;
        assert!((max.z - min.z - expected).abs() < 0.1);
    }

    #[test]
    fn test_scraper_loses_volume_to_nail_holes() {
        let dims = Dimensions::default();
        let with_holes = capsule_scraper(&dims).unwrap();
        let no_holes = Dimensions {
            pin_count: 0,
            ..dims
        };
        let solid = capsule_scraper(&no_holes).unwrap();
        assert!(with_holes.volume() < solid.volume());
    }

    #[test]
    fn test_lid_idempotent() {
        let dims = Dimensions::default();
        let a_solids = generate(&dims).unwrap();
        let a = &a_solids[1].mesh;
        let b_solids = generate(&dims).unwrap();
        let b = &b_solids[1].mesh;
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.triangles(), b.triangles());
    }
}
