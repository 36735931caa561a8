//! # Preview Assembly
//!
//! Box, lid and spout translated into their assembled positions and
//! merged into one mesh. No CSG is performed; the output is for viewing,
//! not printing.

use crate::dimensions::Dimensions;
use crate::error::PartError;
use crate::parts::{container, lid, spout};
use crate::solid::NamedSolid;
use glam::DVec3;

pub fn generate(dims: &Dimensions) -> Result<Vec<NamedSolid>, PartError> {
    // Box already rests on the bed, centered in XY
    let mut scene = container::generate(dims)?.remove(0).mesh;

    // Lid seated on the box rim: the recess block reaches into the
    // opening, the plate underside lands on the rim
    let mut lid_mesh = lid::generate(dims)?.remove(0).mesh;
    lid_mesh.translate(DVec3::new(
        0.0,
        0.0,
        dims.box_height - dims.recess_depth + dims.recess_overlap,
    ));
    scene.merge(&lid_mesh);

    // Spout threaded into the drain wall: shaft along the drain axis,
    // flange against the outer wall
    let mut spout_mesh = spout::spout_body(dims)?;
    spout_mesh.rotate_y(std::f64::consts::FRAC_PI_2);
    spout_mesh.translate(DVec3::new(
        -container::drain_half_span(dims),
        0.0,
        dims.drain_center_height(),
    ));
    let spout_mesh = container::oriented(dims, spout_mesh);
    scene.merge(&spout_mesh);

    Ok(vec![NamedSolid::new("assembly", scene)])
}
