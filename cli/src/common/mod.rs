//! # pyinit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from the
//! command-specific logic in `commands::` and the core infrastructure in
//! `core::`:
//!
//! - **`fs`**: Directory creation, file reads, writes, appends and copies.
//! - **`network`**: Downloading text templates over HTTP.
//! - **`process`**: Running external tools and checking their exit status.
//!

/// Utilities for filesystem operations (I/O, copy).
pub mod fs;
/// Template downloads over HTTP.
pub mod network;
/// Execution of external processes.
pub mod process;
