//! # Export Driver
//!
//! Writes one named solid to the output directory in the requested
//! formats.

use crate::error::IoResult;
use crate::stl::save_stl;
use grounds_mesh::Mesh;
use std::fs;
use std::path::{Path, PathBuf};

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Binary STL mesh for slicing
    Stl,
    /// STEP boundary representation for CAD editing
    Step,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Stl => "stl",
            OutputFormat::Step => "step",
        }
    }

    /// Both formats the batch driver writes by default.
    pub fn all() -> &'static [OutputFormat] {
        #[cfg(feature = "step")]
        {
            &[OutputFormat::Stl, OutputFormat::Step]
        }
        #[cfg(not(feature = "step"))]
        {
            &[OutputFormat::Stl]
        }
    }
}

/// Writes `mesh` as `<dir>/<name>.<ext>` for each requested format.
///
/// The directory is created on demand. Returns the paths written.
pub fn write_mesh(
    mesh: &Mesh,
    dir: &Path,
    name: &str,
    formats: &[OutputFormat],
) -> IoResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        let path = dir.join(format!("{name}.{}", format.extension()));
        match format {
            OutputFormat::Stl => save_stl(mesh, &path)?,
            #[cfg(feature = "step")]
            OutputFormat::Step => crate::step::save_step(mesh, &path)?,
            #[cfg(not(feature = "step"))]
            OutputFormat::Step => {
                return Err(crate::error::IoError::invalid_content(
                    "STEP support not compiled in (enable the `step` feature)",
                ))
            }
        }
        written.push(path);
    }

    Ok(written)
}
