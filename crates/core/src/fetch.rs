//! Page fetching over HTTP.
//!
//! [`HttpFetcher`] is the [`PageSource`](crate::scrape::PageSource) used for
//! real runs. It builds one `reqwest::Client` and reuses it for every page.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::scrape::PageSource;
use crate::{FirmscrapeError, Result};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; Firmscrape/0.1)".to_string() }
    }
}

/// Fetches pages with a shared HTTP client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Builds the underlying client with the configured timeout.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(FirmscrapeError::HttpError)?;

        Ok(Self { client, config })
    }

    /// Performs a GET request and returns the response body as text.
    ///
    /// Redirects are followed. Timeouts map to [`FirmscrapeError::Timeout`]
    /// and non-success status codes to [`FirmscrapeError::HttpStatus`].
    pub async fn get(&self, url: &str) -> Result<String> {
        let parsed_url = parse_url(url)?;

        let response = self
            .client
            .get(parsed_url)
            .header("User-Agent", &self.config.user_agent)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FirmscrapeError::HttpStatus { status: status.as_u16(), url: url.to_string() });
        }

        response.text().await.map_err(|e| self.map_error(e))
    }

    fn map_error(&self, e: reqwest::Error) -> FirmscrapeError {
        if e.is_timeout() {
            FirmscrapeError::Timeout { timeout: self.config.timeout }
        } else {
            FirmscrapeError::HttpError(e)
        }
    }
}

impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.get(url).await
    }
}

/// Validates that `url` is absolute with an http(s) scheme.
pub fn parse_url(url: &str) -> Result<Url> {
    let parsed_url = Url::parse(url).map_err(|e| FirmscrapeError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed_url.scheme() {
        "http" | "https" => Ok(parsed_url),
        scheme => Err(FirmscrapeError::InvalidUrl(format!(
            "unsupported scheme {} in {}",
            scheme, url
        ))),
    }
}
