//! # Fit-Test Plate
//!
//! A reduced section of the box drain wall with its threaded boss, plus a
//! shortened spout and a seal ring, arranged on one plate. Printing the
//! plate checks thread engagement and gasket compression without
//! committing a full box worth of filament.

use crate::dimensions::Dimensions;
use crate::error::PartError;
use crate::parts::{cylinder_x, rest_on_bed, spout};
use crate::solid::NamedSolid;
use crate::threads;
use config::constants::DEFAULT_SEGMENTS;
use glam::DVec3;
use grounds_mesh::primitives::create_box;
use grounds_mesh::{difference_all, union, Mesh};

/// Coupon wall section, scaled down from the full box corner.
const COUPON_DEPTH: f64 = 24.0;
const COUPON_WIDTH: f64 = 48.0;
const COUPON_HEIGHT: f64 = 36.0;
/// Shortened spout for the test plate.
const TEST_SPOUT_LENGTH: f64 = 50.0;
/// Spacing between the plate items.
const ITEM_SPACING: f64 = 30.0;
/// Cutter overshoot.
const CUT_OVERSHOOT: f64 = 3.0;

pub fn generate(dims: &Dimensions) -> Result<Vec<NamedSolid>, PartError> {
    let mut plate = coupon(dims)?;

    // Shortened spout in print orientation beside the coupon
    let mut spout_dims = dims.clone();
    spout_dims.spout_length = TEST_SPOUT_LENGTH;
    let mut test_spout = spout::spout_body(&spout_dims)?;
    test_spout.rotate_x(std::f64::consts::PI);
    rest_on_bed(&mut test_spout);
    test_spout.translate(DVec3::new(
        COUPON_DEPTH / 2.0 + ITEM_SPACING + dims.flange_diameter / 2.0,
        0.0,
        0.0,
    ));

    let mut ring = spout::seal_ring(dims)?;
    ring.translate(DVec3::new(
        COUPON_DEPTH / 2.0 + 2.0 * ITEM_SPACING + 1.5 * dims.flange_diameter,
        0.0,
        0.0,
    ));

    // Items are disjoint on the plate: plain merge, no CSG
    plate.merge(&test_spout);
    plate.merge(&ring);

    Ok(vec![NamedSolid::new("fit_test", plate)])
}

/// Box-wall coupon: drain wall with boss, tight clearance bore and
/// internal threads, side walls and floor, open top and back.
fn coupon(dims: &Dimensions) -> Result<Mesh, PartError> {
    let half_height = COUPON_HEIGHT / 2.0;
    let wall = dims.wall_thickness;

    let outer = create_box(
        DVec3::new(COUPON_DEPTH, COUPON_WIDTH, COUPON_HEIGHT),
        true,
    )?;

    // Interior open at the top and the +X side, leaving the drain wall,
    // side walls and floor
    let mut interior = create_box(
        DVec3::new(
            COUPON_DEPTH - wall + CUT_OVERSHOOT,
            COUPON_WIDTH - 2.0 * wall,
            COUPON_HEIGHT - wall + CUT_OVERSHOOT,
        ),
        true,
    )?;
    interior.translate(DVec3::new(
        (wall + CUT_OVERSHOOT) / 2.0,
        0.0,
        (wall + CUT_OVERSHOOT) / 2.0,
    ));

    let shell = difference_all(&outer, [&interior]);

    // Boss on the inner drain wall, as on the real box
    let drain_z = -half_height + dims.drain_center_height();
    let mut boss = cylinder_x(
        dims.boss_length + 1.0,
        dims.boss_outer_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    boss.translate(DVec3::new(-COUPON_DEPTH / 2.0 + wall - 1.0, 0.0, drain_z));
    let body = union(&shell, &boss);

    // Tight clearance bore: threads bite harder on the test piece
    let bore_length = CUT_OVERSHOOT + wall + dims.boss_length + CUT_OVERSHOOT;
    let mut bore = cylinder_x(
        bore_length,
        dims.thread_major_diameter / 2.0 - 0.45,
        DEFAULT_SEGMENTS,
    )?;
    bore.translate(DVec3::new(
        -COUPON_DEPTH / 2.0 - CUT_OVERSHOOT,
        0.0,
        drain_z,
    ));

    // Coarser thread sweep than the real box keeps the test print quick
    let mut grooves = threads::internal_grooves(
        dims.thread_major_diameter - 0.9,
        dims.thread_pitch,
        dims.thread_length_box,
        4,
    )?;
    grooves.rotate_y(std::f64::consts::FRAC_PI_2);
    grooves.translate(DVec3::new(-COUPON_DEPTH / 2.0 + wall, 0.0, drain_z));

    let mut body = difference_all(&body, [&bore, &grooves]);
    rest_on_bed(&mut body);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_test_single_plate() {
        let solids = generate(&Dimensions::default()).unwrap();
        assert_eq!(solids.len(), 1);
        assert_eq!(solids[0].name, "fit_test");
    }

    #[test]
    fn test_plate_on_bed() {
        let solids = generate(&Dimensions::default()).unwrap();
        let (min, _) = solids[0].mesh.bounding_box();
        assert!(min.z.abs() < 1e-9);
    }

    #[test]
    fn test_plate_spans_all_items() {
        let dims = Dimensions::default();
        let solids = generate(&dims).unwrap();
        let (min, max) = solids[0].mesh.bounding_box();
        // Coupon at the left, ring at the right
        assert!(max.x - min.x > COUPON_DEPTH + 2.0 * ITEM_SPACING);
    }

    #[test]
    fn test_coupon_is_hollow() {
        let dims = Dimensions::default();
        let body = coupon(&dims).unwrap();
        let envelope = COUPON_DEPTH * COUPON_WIDTH * COUPON_HEIGHT;
        assert!(body.volume() < 0.6 * envelope);
        assert!(body.volume() > 0.0);
    }
}
