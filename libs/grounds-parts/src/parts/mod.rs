//! # Part Generators
//!
//! One module per physical part. Each `generate` consumes a validated
//! dimension set and returns the named solids that part contributes.

mod assembly;
mod container;
mod fit_test;
mod lid;
mod scraper;
mod spout;

use crate::dimensions::Dimensions;
use crate::error::PartError;
use crate::solid::NamedSolid;
use glam::DVec3;
use grounds_mesh::{Mesh, MeshError};
use std::fmt;
use std::str::FromStr;

/// The parts of the container system, in batch generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// Container box with drain boss and sloped floor
    Box,
    /// Lid with handle, bayonet socket and the capsule scraper
    Lid,
    /// Threaded drain spout and its TPU seal ring
    Spout,
    /// French-press scraper that stows in the lid handle groove
    StorageScraper,
    /// Combined fit-test plate for thread and seal checks
    FitTest,
    /// Positioned preview of box, lid and spout
    Assembly,
}

impl PartKind {
    /// All parts in the order the batch driver runs them.
    pub fn all() -> [PartKind; 6] {
        [
            PartKind::Box,
            PartKind::Lid,
            PartKind::Spout,
            PartKind::StorageScraper,
            PartKind::FitTest,
            PartKind::Assembly,
        ]
    }

    /// CLI / API name of the part.
    pub fn name(&self) -> &'static str {
        match self {
            PartKind::Box => "box",
            PartKind::Lid => "lid",
            PartKind::Spout => "spout",
            PartKind::StorageScraper => "storage-scraper",
            PartKind::FitTest => "fit-test",
            PartKind::Assembly => "assembly",
        }
    }

    /// Runs the generator for this part.
    pub fn generate(&self, dims: &Dimensions) -> Result<Vec<NamedSolid>, PartError> {
        dims.validate()?;
        tracing::debug!(part = self.name(), "generating part");
        match self {
            PartKind::Box => container::generate(dims),
            PartKind::Lid => lid::generate(dims),
            PartKind::Spout => spout::generate(dims),
            PartKind::StorageScraper => scraper::generate(dims),
            PartKind::FitTest => fit_test::generate(dims),
            PartKind::Assembly => assembly::generate(dims),
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box" => Ok(PartKind::Box),
            "lid" => Ok(PartKind::Lid),
            "spout" => Ok(PartKind::Spout),
            "storage-scraper" => Ok(PartKind::StorageScraper),
            "fit-test" => Ok(PartKind::FitTest),
            "assembly" => Ok(PartKind::Assembly),
            other => Err(format!(
                "unknown part '{other}' (expected one of: box, lid, spout, storage-scraper, fit-test, assembly)"
            )),
        }
    }
}

// =============================================================================
// SHARED GEOMETRY HELPERS
// =============================================================================

/// Translates a solid so its lowest point rests on the print bed (z=0).
pub(crate) fn rest_on_bed(mesh: &mut Mesh) {
    let (min, _) = mesh.bounding_box();
    mesh.translate(DVec3::new(0.0, 0.0, -min.z));
}

/// Cylinder along +X starting at x=0.
pub(crate) fn cylinder_x(length: f64, radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    let mut cyl = grounds_mesh::primitives::create_cylinder(length, radius, segments)?;
    cyl.rotate_y(std::f64::consts::FRAC_PI_2);
    Ok(cyl)
}
