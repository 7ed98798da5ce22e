//! HTTP fetcher implementation
//!
//! This module handles all page retrieval for the harvester:
//! - The [`PageFetcher`] seam consumed by the collector and extractor
//! - Building the reqwest client with user agent and timeouts
//! - Classifying transport and status failures into [`FetchError`]

use crate::config::HttpConfig;
use crate::FetchError;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Retrieves the decoded text of a page
///
/// Implementations must fail with [`FetchError`] on network or HTTP failure.
/// Callers await each fetch before issuing the next one.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use news_harvest::config::HttpConfig;
/// use news_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production fetcher backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    /// Fetches a URL and decodes the body as UTF-8
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | 2xx | Body text (invalid UTF-8 replaced) |
    /// | Any other status | `FetchError::Status` |
    /// | Timeout, connection or body read failure | `FetchError::Request` |
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Pages are always decoded as UTF-8, whatever the Content-Type claims
        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
