//! # pyinit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that add context to errors:
//! - **`ensure_dir_exists`**: Creates a directory and its parents; fails if the path is a file.
//! - **`read_file_to_string`**: Reads a whole file.
//! - **`write_string_to_file`**: Creates or overwrites a file, creating its parent directory.
//! - **`append_to_file`**: Appends to a file that must already exist.
//!
use crate::core::error::{PyinitError, Result};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Missing parents are created (like `mkdir -p`). Calling this on an existing
/// directory is a no-op.
///
/// # Arguments
///
/// * `path` - The directory that must exist afterwards.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if the directory existed or was created.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory (`PyinitError::FileSystem`).
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        // Create the directory and any missing parents.
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        // Something else (usually a file) already occupies the path.
        anyhow::bail!(PyinitError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` naming the file if it cannot be opened or is not valid UTF-8.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file, overwriting it if it exists.
///
/// # Arguments
///
/// * `path` - The file to create or replace. Its parent directory is created if needed.
/// * `content` - The complete new content of the file.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be prepared or the write fails.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    // `fs::write` does not create parents.
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Appends `content` to the end of an existing file.
///
/// Used for manifests generated by other tools, which must already be in place.
///
/// # Arguments
///
/// * `path` - The file to extend.
/// * `content` - Text written verbatim after the current end of the file.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once every byte has been written.
///
/// # Errors
///
/// Returns an `Err` if the file does not exist; it is never created here.
/// Write failures are returned with the file name as context.
pub fn append_to_file(path: &Path, content: &str) -> Result<()> {
    // No `.create(true)`: a missing file is an error.
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {:?} for appending", path))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to append to file {:?}", path))?;
    debug!("Appended {} bytes to {:?}", content.len(), path);
    Ok(())
}
