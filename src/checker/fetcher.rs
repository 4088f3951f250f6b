//! HTTP fetcher implementation
//!
//! This module handles the single HTTP request of a run:
//! - Building an HTTP client with the configured user agent and timeout
//! - Sending one GET, following redirects with the client's default policy
//! - Capturing the final URL, status, content type and body

use crate::config::FetchConfig;
use crate::SeoError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL that was requested
    pub requested_url: Url,

    /// Final URL after redirects; internal links resolve against it
    pub final_url: Url,

    /// HTTP status code of the final response
    pub status_code: u16,

    /// Content-Type header value, if any
    pub content_type: Option<String>,

    /// Page body decoded as text
    pub body: String,
}

impl FetchedPage {
    /// Returns true for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Returns true if the server declared an HTML content type
    ///
    /// A missing header counts as HTML.
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .map_or(true, |ct| ct.contains("text/html") || ct.contains("application/xhtml"))
    }

    /// Returns true if at least one redirect was followed
    pub fn was_redirected(&self) -> bool {
        self.requested_url != self.final_url
    }
}

/// Builds an HTTP client from the fetch configuration
///
/// Redirects use reqwest's default policy. The request timeout is only set
/// when configured, otherwise the client default applies.
///
/// # Example
///
/// ```no_run
/// use seo_checker::config::FetchConfig;
/// use seo_checker::checker::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL with a single GET
///
/// Any status code is returned as a `FetchedPage`; deciding whether a
/// non-2xx response is fatal is left to the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - A response was received and its body read
/// * `Err(SeoError::Fetch)` - Network, DNS, TLS, timeout or body read failure
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, SeoError> {
    let fetch_err = |source| SeoError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url.clone()).send().await.map_err(fetch_err)?;

    let status = response.status();
    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.text().await.map_err(fetch_err)?;

    let page = FetchedPage {
        requested_url: url.clone(),
        final_url,
        status_code: status.as_u16(),
        content_type,
        body,
    };

    if page.was_redirected() {
        tracing::info!("Redirected to {}", page.final_url);
    }

    tracing::debug!(
        "Fetched {} ({} bytes, status {})",
        page.final_url,
        page.body.len(),
        page.status_code
    );

    Ok(page)
}
