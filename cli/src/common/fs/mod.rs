//! # pyinit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the project initializer:
//!
//! - **`copy`**: Copies template files into the project (`fs_extra`).
//! - **`io`**: Directory creation, whole-file reads, writes and appends.
//!
//! Callers import the submodule they need, e.g.
//! `use crate::common::fs::io::ensure_dir_exists;`.
//!

/// Template file copying (`copy_file`).
pub mod copy;
/// Basic file I/O (`ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`, `append_to_file`).
pub mod io;
