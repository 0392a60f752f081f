//! # pyinit Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! pyinit makes exactly one kind of network request: downloading a plain-text
//! template (the upstream Python `.gitignore`). This module defines the
//! `TemplateFetcher` seam used by the initializer and re-exports the blocking
//! HTTP implementation from the `http` submodule.
//!
//! ## Architecture
//!
//! - **`TemplateFetcher`**: Fetches the text body of a URL.
//! - **`http::HttpFetcher`**: Implementation backed by `reqwest::blocking`.
//!
//! Tests hand the initializer a fetcher returning canned text so that no
//! network access is needed.
//!
use crate::core::error::Result;

pub mod http;

pub use http::HttpFetcher;

/// Retrieves a remote text template.
pub trait TemplateFetcher {
    /// Returns the body of `url` as text.
    ///
    /// Transport failures and non-success statuses are errors.
    fn fetch_text(&self, url: &str) -> Result<String>;
}
