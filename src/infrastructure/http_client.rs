//! HTTP client for fetching source pages.
//!
//! The client performs exactly one attempt per call: retry policy, if any,
//! belongs to the caller of the ingestion run, not to this layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode, header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Configuration for HTTP client behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// User agent string sent with every request.
    pub user_agent: String,
    /// Whether to follow redirects.
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("bookcart/{}", env!("CARGO_PKG_VERSION")),
            follow_redirects: true,
        }
    }
}

/// Transport-level failure while fetching a page. Any variant aborts the
/// ingestion run with zero writes.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },
}

/// Raw payload of a fetched page, still in its source encoding.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: Vec<u8>,
    /// Content type as declared by the server, if any.
    pub content_type: Option<String>,
}

/// Retrieval of a remote document's raw bytes. The ingestion pipeline only
/// ever issues GET requests through this seam.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// reqwest-backed [`PageFetcher`].
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(&HttpClientConfig::default())
    }

    pub fn with_config(config: &HttpClientConfig) -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .gzip(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        debug!(%url, "HTTP GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?
            .to_vec();

        debug!(bytes = body.len(), ?content_type, "page fetched");

        Ok(FetchedPage { body, content_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn builds_without_redirects() {
        let config = HttpClientConfig {
            timeout_seconds: 5,
            follow_redirects: false,
            ..HttpClientConfig::default()
        };
        assert!(HttpClient::with_config(&config).is_ok());
    }
}
