//! File system utilities for publishing.
//!
//! Provides file operations with automatic directory creation
//! and path-aware error reporting.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{fs, path::Path};

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::ArtifactNotFound(from.to_path_buf()));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).fs_context("copying artifact to", to)?;
    Ok(())
}

/// Writes `content` to `path`, creating parent directories.
///
/// The content lands in a sibling temporary file first and is renamed into
/// place, so readers never observe a half-written file.
pub fn write_file(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::GenericError(format!("{path:?} has no parent directory")))?;
    fs::create_dir_all(parent).fs_context("creating directory", parent)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| Error::GenericError(format!("{path:?} has no file name")))?;
    let tmp = parent.join(format!(".{}.tmp", file_name.to_string_lossy()));

    fs::write(&tmp, content).fs_context("writing", &tmp)?;
    fs::rename(&tmp, path).fs_context("moving into place", path)
}
