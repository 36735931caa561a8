//! # Storage Scraper
//!
//! Compact french-press scraper that stows in the lid handle groove:
//! oblong blade, reinforcement transition, groove shaft with a friction
//! ridge, ribbed grip and a lofted end cap. The whole part carries a
//! uniform scale factor so the web form can offer small/standard/large.

use crate::dimensions::Dimensions;
use crate::error::PartError;
use crate::solid::NamedSolid;
use config::constants::{CORNER_SEGMENTS, DEFAULT_SEGMENTS};
use glam::DVec3;
use grounds_mesh::primitives::{create_box, create_cylinder, create_frustum, create_rounded_box};
use grounds_mesh::{union, union_all, Mesh};

/// Fusion overlap between stacked sections.
const FUSE_OVERLAP: f64 = 0.3;

/// Section lengths before scaling, matching the shipped design.
const BLADE_LENGTH: f64 = 35.0;
const BLADE_WIDTH: f64 = 55.0;
const BLADE_THICKNESS: f64 = 2.5;
const BLADE_CORNER_RADIUS: f64 = 12.0;
const TRANSITION_HEIGHT: f64 = 7.0;
const SHAFT_DIAMETER: f64 = 14.5;
const SHAFT_BASE_LENGTH: f64 = 78.0;
/// Unscaled shaft extension on the scraper end.
const SHAFT_EXTENSION: f64 = 12.0;
const GRIP_DIAMETER: f64 = 18.0;
const GRIP_LENGTH: f64 = 60.0;
const GRIP_RIDGE_HEIGHT: f64 = 1.2;
const GRIP_RIDGE_SPACING: f64 = 5.0;
const END_CAP_HEIGHT: f64 = 5.0;
const RIDGE_HEIGHT: f64 = 6.0;
const RIDGE_BASE_WIDTH: f64 = 7.2;
const RIDGE_BASE_LENGTH: f64 = 45.0;

pub fn generate(dims: &Dimensions) -> Result<Vec<NamedSolid>, PartError> {
    let s = dims.scraper_scale;

    // Oblong blade with rounded corners, lying on the bed
    let blade = create_rounded_box(
        DVec3::new(BLADE_LENGTH * s, BLADE_WIDTH * s, BLADE_THICKNESS * s),
        BLADE_CORNER_RADIUS * s,
        CORNER_SEGMENTS,
        false,
    )?;

    // Transition from blade to shaft: rectangular step, then a collar
    let blade_top = BLADE_THICKNESS * s;
    let mut step = create_box(
        DVec3::new(
            BLADE_LENGTH * 0.5 * s,
            BLADE_WIDTH * 0.5 * s,
            4.0 * s + FUSE_OVERLAP,
        ),
        false,
    )?;
    step.translate(DVec3::new(
        -BLADE_LENGTH * 0.25 * s,
        -BLADE_WIDTH * 0.25 * s,
        blade_top - FUSE_OVERLAP,
    ));

    let mut collar = create_cylinder(
        3.0 * s + FUSE_OVERLAP,
        SHAFT_DIAMETER * s / 2.0 + 1.0 * s,
        DEFAULT_SEGMENTS,
    )?;
    collar.translate(DVec3::new(0.0, 0.0, blade_top + 4.0 * s - FUSE_OVERLAP));

    // Shaft that wedges into the storage groove
    let shaft_start = blade_top + TRANSITION_HEIGHT * s;
    let shaft_length = SHAFT_BASE_LENGTH * s + SHAFT_EXTENSION;
    let mut shaft = create_cylinder(
        shaft_length + FUSE_OVERLAP,
        SHAFT_DIAMETER * s / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    shaft.translate(DVec3::new(0.0, 0.0, shaft_start - FUSE_OVERLAP));

    // Friction ridge mating with the slot in the handle groove
    let ridge_length = RIDGE_BASE_LENGTH * s + 5.0;
    let ridge_gap = 5.0 * s + 2.0;
    let ridge_start = shaft_start + shaft_length - ridge_length - ridge_gap;
    let mut ridge = create_box(
        DVec3::new(
            RIDGE_HEIGHT + FUSE_OVERLAP,
            RIDGE_BASE_WIDTH * s - 1.5,
            ridge_length,
        ),
        false,
    )?;
    ridge.translate(DVec3::new(
        SHAFT_DIAMETER * s / 2.0 - FUSE_OVERLAP,
        -(RIDGE_BASE_WIDTH * s - 1.5) / 2.0,
        ridge_start,
    ));

    // Ribbed grip at the holding end
    let grip_start = shaft_start + shaft_length;
    let grip_length = GRIP_LENGTH * s;
    let grip_radius = GRIP_DIAMETER * s / 2.0;
    let mut grip = create_cylinder(grip_length + FUSE_OVERLAP, grip_radius, DEFAULT_SEGMENTS)?;
    grip.translate(DVec3::new(0.0, 0.0, grip_start - FUSE_OVERLAP));

    // Grip rings are disjoint from one another: merge, one union
    let mut rings = Mesh::new();
    let ring_height = 2.0 * s;
    let mut z_offset = 2.0 * s;
    while z_offset < grip_length - 2.0 * s {
        let mut ring = create_cylinder(
            ring_height,
            grip_radius + GRIP_RIDGE_HEIGHT * s,
            DEFAULT_SEGMENTS,
        )?;
        ring.translate(DVec3::new(0.0, 0.0, grip_start + z_offset));
        rings.merge(&ring);
        z_offset += GRIP_RIDGE_SPACING * s;
    }
    let grip = union(&grip, &rings);

    // Rounded-off end cap
    let cap_start = grip_start + grip_length;
    let mut cap = create_frustum(
        END_CAP_HEIGHT * s + FUSE_OVERLAP,
        grip_radius,
        grip_radius - 2.0 * s,
        DEFAULT_SEGMENTS,
    )?;
    cap.translate(DVec3::new(0.0, 0.0, cap_start - FUSE_OVERLAP));

    let scraper = union_all(&blade, [&step, &collar, &shaft, &ridge, &grip, &cap]);

    tracing::debug!(
        length_mm = total_length(s),
        scale = s,
        "storage scraper assembled"
    );

    Ok(vec![NamedSolid::new("storage_scraper", scraper)])
}

/// Overall length of the assembled scraper for a given scale.
pub(crate) fn total_length(scale: f64) -> f64 {
    BLADE_THICKNESS * scale
        + TRANSITION_HEIGHT * scale
        + SHAFT_BASE_LENGTH * scale
        + SHAFT_EXTENSION
        + GRIP_LENGTH * scale
        + END_CAP_HEIGHT * scale
}
