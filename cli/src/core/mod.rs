//! # pyinit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the command
//! handlers:
//! - `config`: Loading, expanding and validating the user configuration file
//! - `error`: Error types and the crate-wide `Result` alias
//! - `project`: The validated project configuration and its derived names/paths
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{PyinitError, Result}; // For error handling
//! use crate::core::project::{ProjectConfig, ProjectType};
//! ```
//!
pub mod config;
pub mod error;
pub mod project;
