//! Page fetching.
//!
//! The scrapers only need "give me the body of this URL". [`Fetcher`] is that
//! seam: [`HttpFetcher`] does it over the network, tests swap in fixtures.
//! There is no retry policy; a failed fetch simply means no articles from that
//! source for this run.

use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::utils::truncate_for_log;

/// Something that can turn a URL into a raw HTML body.
pub trait Fetcher {
    /// Fetch `url`, sending `headers` in addition to any client defaults.
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<String>;
}

/// [`Fetcher`] backed by a shared `reqwest` client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        Self::new(config.timeout(), &config.user_agent)
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(level = "info", skip(self, headers))]
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<String> {
        let t0 = Instant::now();
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    elapsed_ms = t0.elapsed().as_millis() as u64,
                    timeout = e.is_timeout(),
                    error = %e,
                    "Request failed"
                );
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzerError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            preview = %truncate_for_log(&body, 120),
            "Fetched page"
        );
        Ok(body)
    }
}
