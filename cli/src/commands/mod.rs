//! # pyinit Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! Command handlers invoked from `main.rs`. pyinit has a single command,
//! `init`, which scaffolds one project per invocation.
//!
pub mod init;
