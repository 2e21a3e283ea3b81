//! HTTP API client for the resource API
//!
//! One [`ApiClient`] is built per run and shared by every fetch task. The
//! underlying `reqwest::Client` pools connections and is safe to use from
//! many tasks at once.

use crate::api::types::Page;
use crate::config::Config;
use crate::error::{CliError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::trace;

/// API client for the paginated resource API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch and decode one page.
    ///
    /// A non-success status is returned as [`CliError::HttpStatus`] without
    /// reading the body.
    pub async fn get_page(&self, url: &str) -> Result<Page> {
        trace!(url, "GET page");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CliError::http_status(url, status.as_u16()));
        }

        Ok(response.json::<Page>().await?)
    }
}
