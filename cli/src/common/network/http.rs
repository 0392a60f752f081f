//! # pyinit Blocking HTTP Fetcher
//!
//! File: cli/src/common/network/http.rs
//!
//! Downloads templates with a blocking `reqwest` client. There is no retry
//! and no explicit timeout beyond the client's defaults; a failed download
//! aborts the run like any other step.
//!
use super::TemplateFetcher;
use crate::core::error::{PyinitError, Result};
use anyhow::Context;
use reqwest::blocking::Client;
use tracing::{debug, info};

/// `TemplateFetcher` that performs a real HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pyinit/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

impl TemplateFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        info!("Downloading {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to GET {}", url))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            anyhow::bail!(PyinitError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}
