use crate::SeoError;
use url::Url;

/// Parses the URL to check and verifies it is fetchable
///
/// Only `http` and `https` URLs with a non-empty host are accepted.
///
/// # Examples
///
/// ```
/// use seo_checker::url::parse_target_url;
///
/// let url = parse_target_url("https://site.example/page").unwrap();
/// assert_eq!(url.host_str(), Some("site.example"));
///
/// assert!(parse_target_url("ftp://site.example/").is_err());
/// ```
pub fn parse_target_url(raw: &str) -> Result<Url, SeoError> {
    let url = Url::parse(raw).map_err(|source| SeoError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    let has_host = url.host_str().is_some_and(|h| !h.is_empty());
    if !matches!(url.scheme(), "http" | "https") || !has_host {
        return Err(SeoError::UnsupportedScheme {
            url: raw.to_string(),
        });
    }

    Ok(url)
}
