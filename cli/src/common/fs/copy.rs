//! # pyinit Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! Copies single template files into a new project. The copy is delegated to
//! `fs_extra::file::copy` with overwrite enabled, so re-running a step
//! replaces the previous copy.
//!
use crate::core::error::{PyinitError, Result};
use std::path::Path;
use tracing::info;

/// Copies `source` to `target`, replacing `target` if it exists.
///
/// # Arguments
///
/// * `source` - The template file to copy. Must be a regular file.
/// * `target` - The destination file path (not a directory).
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if the file was copied.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `source` is missing or not a file (`PyinitError::FileSystem`).
/// - The copy itself fails, for example because the target directory does not exist.
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    // Report a missing template by name rather than through fs_extra's I/O error.
    if !source.is_file() {
        anyhow::bail!(PyinitError::FileSystem(format!(
            "Template file not found: {:?}",
            source
        )));
    }

    // Re-running a step replaces the earlier copy.
    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;
    fs_extra::file::copy(source, target, &options).map_err(|e| {
        anyhow::anyhow!(e).context(format!("Failed to copy {:?} to {:?}", source, target))
    })?;

    info!("Copied {:?} to {:?}", source, target);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_copy_file_overwrites_target() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("template.yaml");
        let target = dir.path().join("copy.yaml");
        fs::write(&source, "repos: []\n")?;
        fs::write(&target, "stale")?;

        copy_file(&source, &target)?;
        assert_eq!(fs::read_to_string(&target)?, "repos: []\n");
        Ok(())
    }

    #[test]
    fn test_copy_missing_source_fails() -> Result<()> {
        let dir = tempdir()?;
        let err = copy_file(&dir.path().join("missing"), &dir.path().join("out")).unwrap_err();
        assert!(err.to_string().contains("Template file not found"));
        Ok(())
    }
}
