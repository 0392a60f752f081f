//! # pyinit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own test crate and runs the compiled
//! `pyinit` binary through `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// # Get pyinit Command (`pyinit_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `pyinit` binary with
/// `RUST_LOG` and the pyinit environment fallbacks cleared, so the host
/// environment cannot leak into a test.
///
/// ## Panics
/// Panics if the `pyinit` binary cannot be found via `Command::cargo_bin`.
pub fn pyinit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pyinit").expect("Failed to find pyinit binary for testing");
    cmd.env_remove("RUST_LOG")
        .env_remove("PYINIT_PARENT_PATH")
        .env_remove("PYINIT_CONFIG");
    cmd
}

/// Writes a configuration file into `dir` that points projects at `parent`.
pub fn write_config(dir: &Path, parent: &Path) -> PathBuf {
    let path = dir.join("pyinit.toml");
    fs::write(
        &path,
        format!("[defaults]\nparent_path = \"{}\"\n", parent.display()),
    )
    .expect("Failed to write test configuration");
    path
}
