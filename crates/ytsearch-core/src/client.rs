//! HTTP client with marker polling for youtube.com
//!
//! Provides a browser-impersonating HTTP client that refetches the
//! results page until it carries the embedded-data marker, with a retry
//! ceiling and exponential backoff instead of polling forever.

use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{Result, YtSearchError};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL requests are issued against (default: youtube.com)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Maximum refetch attempts when the marker is missing (default: 3)
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

const BASE_URL: &str = "https://www.youtube.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client wrapper with marker polling
///
/// Handles all HTTP communication with youtube.com, including:
/// - Browser-like headers (User-Agent, Accept-Language) and the consent
///   cookie, so the served page is the one embedding `ytInitialData`
/// - Per-request timeout
/// - Bounded refetching with exponential backoff while the marker is
///   missing from the response body
pub struct YoutubeClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl YoutubeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    "en-US,en;q=0.9".parse().unwrap(),
                );
                // Pre-accepted consent: the EU interstitial page does not
                // embed the search data.
                headers.insert(reqwest::header::COOKIE, "CONSENT=YES+".parse().unwrap());
                headers
            })
            .build()
            .map_err(YtSearchError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url,
            max_retries: config.max_retries,
        })
    }

    /// Fetch HTML content from a path on the configured base URL
    ///
    /// # Arguments
    /// * `path` - The path to fetch (e.g., "/results?search_query=test")
    ///
    /// # Returns
    /// The HTML content as a string, or an error if the request fails
    ///
    /// # Errors
    /// `Http` on network failures and non-success status codes
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(YtSearchError::Http)?
            .error_for_status()
            .map_err(YtSearchError::Http)?;

        response.text().await.map_err(YtSearchError::Http)
    }

    /// Fetch a path, refetching until the body contains `marker`
    ///
    /// YouTube occasionally serves a shell page without the embedded
    /// data. After the initial request, up to `max_retries` refetches are
    /// issued with exponential backoff (1s, 2s, 4s) before giving up.
    ///
    /// # Arguments
    /// * `path` - The path to fetch
    /// * `marker` - Substring the response body must contain
    ///
    /// # Returns
    /// The first response body containing the marker
    ///
    /// # Errors
    /// - `Http` - Network or status failures (not retried)
    /// - `MarkerNotServed` - Every attempt returned a marker-less body
    pub async fn fetch_until_marker(&self, path: &str, marker: &str) -> Result<String> {
        let mut attempt = 0;

        loop {
            let body = self.fetch(path).await?;
            if body.contains(marker) {
                return Ok(body);
            }

            if attempt >= self.max_retries {
                return Err(YtSearchError::MarkerNotServed {
                    attempts: attempt + 1,
                });
            }

            // Exponential backoff: 1s, 2s, 4s
            let backoff = Duration::from_secs(1 << attempt);
            warn!(
                attempt = attempt + 1,
                backoff_secs = backoff.as_secs(),
                marker,
                "marker missing from response body, refetching"
            );
            sleep(backoff).await;
            attempt += 1;
        }
    }
}
