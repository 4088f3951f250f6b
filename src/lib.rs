//! SEO Checker: single-page on-page SEO signal extraction
//!
//! This crate fetches one web page, extracts its title, meta description,
//! headings, images, links and word statistics, and writes them to a
//! plain-text report named after the page's host.

pub mod checker;
pub mod config;
pub mod report;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for SEO Checker operations
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Unsupported URL '{url}': only http and https URLs with a host are supported")]
    UnsupportedScheme { url: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTTP {status} returned for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Document at {url} has no <title> element")]
    MissingTitle { url: String },

    #[error("Failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for SEO Checker operations
pub type Result<T> = std::result::Result<T, SeoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use checker::{check_url, StopwordSet};
pub use config::Config;
pub use report::{Heading, ImageLink, PageLink, SeoReport};
