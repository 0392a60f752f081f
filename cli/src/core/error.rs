//! # pyinit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout pyinit. Every setup
//! step is fail-fast, so errors are never recovered from inside the crate;
//! they carry enough detail for the final message printed by `main.rs`.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PyinitError`: A custom error enum using `thiserror` for the failure kinds
//!   callers may want to match on (configuration, filesystem, external
//!   command, HTTP).
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so call sites can add
//!   context with `anyhow::Context`.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !path.is_dir() {
//!     anyhow::bail!(PyinitError::FileSystem(format!("Not a directory: {}", path.display())));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for pyinit.
#[derive(Error, Debug)]
pub enum PyinitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error(
        "External command failed: {cmd}, Status: {status}{}",
        captured_output(.stdout, .stderr)
    )]
    ExternalCommand {
        cmd: String,
        status: String,
        stdout: String,
        stderr: String,
    },

    #[error("HTTP request to {url} failed with status {status}")]
    Http { url: String, status: u16 },
}

/// Formats the streams of a failed command for its error message.
fn captured_output(stdout: &str, stderr: &str) -> String {
    let mut out = String::new();
    for (label, stream) in [("stdout", stdout), ("stderr", stderr)] {
        let stream = stream.trim_end();
        if !stream.is_empty() {
            out.push_str(&format!("\n--- {} ---\n{}", label, stream));
        }
    }
    out
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
