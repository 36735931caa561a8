//! # Container Box
//!
//! The main box: rounded hollow shell, floor sloped toward the drain
//! wall with a drainage channel, interior threaded boss, drain bore and
//! foot recesses. The drain wall is selected by the spout position.

use crate::dimensions::{Dimensions, SpoutPosition};
use crate::error::PartError;
use crate::parts::{cylinder_x, rest_on_bed};
use crate::solid::NamedSolid;
use crate::threads;
use config::constants::{CORNER_SEGMENTS, DEFAULT_SEGMENTS};
use glam::{DVec2, DVec3};
use grounds_mesh::primitives::{create_cylinder, create_rounded_box};
use grounds_mesh::{difference, extrude, union, Mesh, MeshError, Profile};

/// Extra length on cutters so they always clear the faces they pierce.
const CUT_OVERSHOOT: f64 = 5.0;
/// Fusion overlap where added solids meet existing walls.
const FUSE_OVERLAP: f64 = 1.0;

pub fn generate(dims: &Dimensions) -> Result<Vec<NamedSolid>, PartError> {
    let half_height = dims.box_height / 2.0;

    // Hollow shell with filleted vertical edges, open at the top
    let outer = create_rounded_box(
        DVec3::new(dims.box_length, dims.box_width, dims.box_height),
        dims.fillet_radius,
        CORNER_SEGMENTS,
        true,
    )?;

    let inner_fillet = (dims.fillet_radius - dims.wall_thickness).max(0.5);
    let mut cavity = create_rounded_box(
        DVec3::new(
            dims.interior_length(),
            dims.interior_width(),
            dims.box_height - dims.wall_thickness + CUT_OVERSHOOT,
        ),
        inner_fillet,
        CORNER_SEGMENTS,
        false,
    )?;
    cavity.translate(DVec3::new(0.0, 0.0, -half_height + dims.wall_thickness));

    let shell = difference(&outer, &cavity);

    // Sloped floor directing liquid at the drain wall
    let floor = oriented(dims, floor_wedge(dims)?);
    let body = union(&shell, &floor);

    // Shallow channel down the middle of the slope
    let channel = oriented(dims, channel_cutter(dims)?);
    let body = difference(&body, &channel);

    // Threaded drain fitting on the selected wall
    let body = union(&body, &oriented(dims, drain_boss(dims)?));
    let body = difference(&body, &oriented(dims, drain_bore(dims)?));
    let body = difference(&body, &oriented(dims, drain_grooves(dims)?));

    // Foot recesses under the base
    let mut body = difference(&body, &foot_cutters(dims)?);

    rest_on_bed(&mut body);

    Ok(vec![NamedSolid::new("box", body)])
}

/// Distance from the box center to the outer drain wall.
pub(crate) fn drain_half_span(dims: &Dimensions) -> f64 {
    match dims.spout_position {
        SpoutPosition::Left | SpoutPosition::Right => dims.box_length / 2.0,
        SpoutPosition::Rear => dims.box_width / 2.0,
    }
}

/// Drain axis height in centered coordinates.
pub(crate) fn drain_center_z(dims: &Dimensions) -> f64 {
    -dims.box_height / 2.0 + dims.drain_center_height()
}

/// Rotates a canonically built feature (drain wall at -X) onto the
/// configured drain wall.
pub(crate) fn oriented(dims: &Dimensions, mut mesh: Mesh) -> Mesh {
    match dims.spout_position {
        SpoutPosition::Left => {}
        SpoutPosition::Right => mesh.rotate_z(std::f64::consts::PI),
        SpoutPosition::Rear => mesh.rotate_z(std::f64::consts::FRAC_PI_2),
    }
    mesh
}

/// Interior floor extents along (slope run, across), orientation-aware.
fn floor_extents(dims: &Dimensions) -> (f64, f64) {
    match dims.spout_position {
        SpoutPosition::Left | SpoutPosition::Right => {
            (dims.interior_length(), dims.interior_width())
        }
        SpoutPosition::Rear => (dims.interior_width(), dims.interior_length()),
    }
}

/// Wedge profile in the XZ plane extruded across the floor: low edge at
/// the drain wall (-X), rising toward the far wall.
fn floor_wedge(dims: &Dimensions) -> Result<Mesh, MeshError> {
    let (run, across) = floor_extents(dims);
    let run = run + FUSE_OVERLAP;
    let across = across + FUSE_OVERLAP;

    let half_height = dims.box_height / 2.0;
    let z_low = -half_height + dims.drain_lip_height;
    let z_high = z_low + run * dims.slope_angle_deg.to_radians().tan();
    let z_bottom = -half_height + dims.wall_thickness - FUSE_OVERLAP;

    prism_xz(
        &[
            DVec2::new(-run / 2.0, z_bottom),
            DVec2::new(run / 2.0, z_bottom),
            DVec2::new(run / 2.0, z_high),
            DVec2::new(-run / 2.0, z_low),
        ],
        across,
    )
}

/// Sloped channel cut along the floor centerline, guiding liquid into the
/// drain opening.
fn channel_cutter(dims: &Dimensions) -> Result<Mesh, MeshError> {
    let (run, _) = floor_extents(dims);
    let run = run + FUSE_OVERLAP;

    let half_height = dims.box_height / 2.0;
    let z_low = -half_height + dims.drain_lip_height;
    let z_high = z_low + run * dims.slope_angle_deg.to_radians().tan();

    prism_xz(
        &[
            DVec2::new(-run / 2.0 + 2.0, z_low - dims.channel_depth),
            DVec2::new(run / 2.0 - 2.0, z_high - dims.channel_depth),
            DVec2::new(run / 2.0 - 2.0, z_high + FUSE_OVERLAP),
            DVec2::new(-run / 2.0 + 2.0, z_low + FUSE_OVERLAP),
        ],
        dims.channel_width,
    )
}

/// Extrudes an XZ-plane profile along Y, centered on y=0.
fn prism_xz(points_xz: &[DVec2], depth: f64) -> Result<Mesh, MeshError> {
    // Profile y carries -z so the rotation below restores +z
    let flipped: Vec<DVec2> = points_xz.iter().map(|p| DVec2::new(p.x, -p.y)).collect();
    let profile = Profile::from_points(flipped)?;

    let mut mesh = extrude(&profile, depth)?;
    // (x, -z, t) → (x, t, z)
    mesh.rotate_x(-std::f64::consts::FRAC_PI_2);
    mesh.translate(DVec3::new(0.0, -depth / 2.0, 0.0));
    Ok(mesh)
}

/// Boss cylinder protruding from the inner drain wall into the box.
fn drain_boss(dims: &Dimensions) -> Result<Mesh, MeshError> {
    let inner_wall = -drain_half_span(dims) + dims.wall_thickness;
    let mut boss = cylinder_x(
        dims.boss_length + FUSE_OVERLAP,
        dims.boss_outer_diameter / 2.0,
        DEFAULT_SEGMENTS,
    )?;
    boss.translate(DVec3::new(inner_wall - FUSE_OVERLAP, 0.0, drain_center_z(dims)));
    Ok(boss)
}

/// Clearance bore through wall and boss, undersized so the spout threads
/// bite into the boss.
fn drain_bore(dims: &Dimensions) -> Result<Mesh, MeshError> {
    let outer_wall = -drain_half_span(dims);
    let length = CUT_OVERSHOOT + dims.wall_thickness + dims.boss_length + CUT_OVERSHOOT;
    let mut bore = cylinder_x(
        length,
        dims.thread_major_diameter / 2.0 - 1.0,
        DEFAULT_SEGMENTS,
    )?;
    bore.translate(DVec3::new(outer_wall - CUT_OVERSHOOT, 0.0, drain_center_z(dims)));
    Ok(bore)
}

/// Internal thread grooves inside the boss bore.
fn drain_grooves(dims: &Dimensions) -> Result<Mesh, MeshError> {
    let mut grooves = threads::internal_grooves(
        dims.thread_major_diameter - 2.0,
        dims.thread_pitch,
        dims.thread_length_box,
        6,
    )?;
    // Thread axis +Z → +X, starting at the inner wall surface
    grooves.rotate_y(std::f64::consts::FRAC_PI_2);
    grooves.translate(DVec3::new(
        -drain_half_span(dims) + dims.wall_thickness,
        0.0,
        drain_center_z(dims),
    ));
    Ok(grooves)
}

/// Four foot recess cylinders, merged into a single cutter.
fn foot_cutters(dims: &Dimensions) -> Result<Mesh, MeshError> {
    let half_height = dims.box_height / 2.0;
    let x = dims.box_length / 2.0 - dims.foot_edge_margin;
    let y = dims.box_width / 2.0 - dims.foot_edge_margin;

    let mut cutters = Mesh::new();
    for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
        let mut foot = create_cylinder(
            dims.foot_recess_depth + CUT_OVERSHOOT,
            dims.foot_diameter / 2.0,
            DEFAULT_SEGMENTS / 2,
        )?;
        foot.translate(DVec3::new(sx * x, sy * y, -half_height - CUT_OVERSHOOT));
        cutters.merge(&foot);
    }
    Ok(cutters)
}
