//! Error types for firmscrape operations.
//!
//! This module defines the main error type [`FirmscrapeError`] which covers
//! fetching, descriptor loading and report writing. Missing markup is never
//! an error: extractors fall back to empty values instead.
//!
//! # Example
//!
//! ```rust
//! use firmscrape_core::{FirmscrapeError, Result};
//!
//! fn require_site(site: &str) -> Result<&str> {
//!     if site.is_empty() {
//!         return Err(FirmscrapeError::ConfigError("empty site id".to_string()));
//!     }
//!     Ok(site)
//! }
//! # assert!(require_site("").is_err());
//! ```

use thiserror::Error;

/// Main error type for scraping and reporting operations.
#[derive(Error, Debug)]
pub enum FirmscrapeError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered with a non-success status code.
    #[error("HTTP {status} returned for {url}")]
    HttpStatus { status: u16, url: String },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Site descriptor errors.
    ///
    /// Returned when a descriptor file is missing, unreadable or contains
    /// an unknown or malformed directive.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File write errors.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),

    /// Spreadsheet generation errors.
    #[error("Failed to write workbook: {0}")]
    XlsxError(String),

    /// JSON serialization errors.
    #[error("Failed to serialize report: {0}")]
    SerializeError(String),
}

#[cfg(feature = "xlsx")]
impl From<rust_xlsxwriter::XlsxError> for FirmscrapeError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        FirmscrapeError::XlsxError(err.to_string())
    }
}

impl From<serde_json::Error> for FirmscrapeError {
    fn from(err: serde_json::Error) -> Self {
        FirmscrapeError::SerializeError(err.to_string())
    }
}

impl FirmscrapeError {
    /// Whether this error came from fetching a page rather than from local work.
    pub fn is_transport(&self) -> bool {
        match self {
            #[cfg(feature = "fetch")]
            FirmscrapeError::HttpError(_) => true,
            FirmscrapeError::Timeout { .. } | FirmscrapeError::HttpStatus { .. } | FirmscrapeError::InvalidUrl(_) => {
                true
            }
            _ => false,
        }
    }
}

/// Result type alias for FirmscrapeError.
pub type Result<T> = std::result::Result<T, FirmscrapeError>;
