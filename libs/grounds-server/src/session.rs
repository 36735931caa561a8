//! # Sessions
//!
//! A session is a UUID-named directory under the server's output root
//! holding one generation run's files. Giving every request its own
//! directory is what makes concurrent requests safe: no two runs ever
//! share an output location.

use crate::error::ApiError;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Resolves and validates a session directory.
///
/// The id must parse as a UUID, which also rules out path traversal.
pub fn session_dir(output_root: &Path, session_id: &str) -> Result<PathBuf, ApiError> {
    let id: Uuid = session_id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("invalid session id '{session_id}'")))?;
    Ok(output_root.join(id.to_string()))
}

/// Validates a requested artifact filename.
///
/// Only the flat `name.stl` files the generators write are servable.
pub fn checked_filename(name: &str) -> Result<&str, ApiError> {
    let valid = name
        .strip_suffix(".stl")
        .is_some_and(|stem| !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_lowercase() || b == b'_'));

    if valid {
        Ok(name)
    } else {
        Err(ApiError::NotFound(format!("invalid file name '{name}'")))
    }
}

/// Lists the STL files present in a session directory.
pub fn session_files(dir: &Path) -> Result<Vec<PathBuf>, ApiError> {
    if !dir.is_dir() {
        return Err(ApiError::NotFound("unknown session".into()));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "stl"))
        .collect();
    files.sort();
    Ok(files)
}
