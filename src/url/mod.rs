//! URL handling module for SEO Checker
//!
//! This module provides target URL validation, link classification, and
//! report filename derivation.

mod filename;
mod target;

use ::url::Url;

// Re-export main functions
pub use filename::report_filename;
pub use target::parse_target_url;

/// Prefixes marking hrefs that never become report links
const SKIPPED_PREFIXES: &[&str] = &["#", "tel:", "mailto:"];

/// Prefixes marking hrefs that are reported verbatim as external links
const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://"];

/// Link classification types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkClassification {
    /// Absolute http(s) href, kept exactly as written
    External(String),
    /// Any other href, resolved against the page URL
    Internal(String),
    /// Empty, fragment-only, `tel:` or `mailto:` href, or one that cannot be resolved
    Skipped,
}

impl LinkClassification {
    /// Returns true if the link is left out of the report
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Classifies an anchor `href` relative to the page it was found on
///
/// Classification is by prefix only and is case-sensitive:
/// 1. Empty, `#...`, `tel:...` and `mailto:...` hrefs are skipped
/// 2. `http://` and `https://` hrefs are external, unmodified
/// 3. Everything else is joined onto `base_url` and internal
///
/// # Arguments
///
/// * `href` - The raw `href` attribute value
/// * `base_url` - The final (post-redirect) URL of the page
///
/// # Examples
///
/// ```
/// use url::Url;
/// use seo_checker::url::{classify_link, LinkClassification};
///
/// let base = Url::parse("https://site.example/").unwrap();
/// assert_eq!(
///     classify_link("/about", &base),
///     LinkClassification::Internal("https://site.example/about".to_string())
/// );
/// assert_eq!(classify_link("#top", &base), LinkClassification::Skipped);
/// ```
pub fn classify_link(href: &str, base_url: &Url) -> LinkClassification {
    if href.is_empty() || SKIPPED_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return LinkClassification::Skipped;
    }

    if EXTERNAL_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return LinkClassification::External(href.to_string());
    }

    match base_url.join(href) {
        Ok(resolved) => LinkClassification::Internal(resolved.to_string()),
        Err(e) => {
            tracing::debug!("Skipping unresolvable href {:?}: {}", href, e);
            LinkClassification::Skipped
        }
    }
}
