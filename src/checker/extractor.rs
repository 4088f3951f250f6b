//! HTML extractor for on-page SEO signals
//!
//! This module parses a fetched document and pulls out:
//! - Title and meta description
//! - Headings h1 through h6
//! - Images with their alt text
//! - Internal and external links
//! - Word statistics over the visible text

use crate::checker::stopwords::StopwordSet;
use crate::checker::words::compute_word_stats;
use crate::report::{
    Heading, ImageLink, PageLink, SeoReport, MAX_HEADING_LEVEL, NO_META_DESCRIPTION,
};
use crate::url::{classify_link, LinkClassification};
use crate::SeoError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Elements whose text never reaches the reader; `<noscript>` fallbacks still count
const NON_VISIBLE_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Extracts a `SeoReport` from an HTML document
///
/// # Arguments
///
/// * `html` - The raw HTML body
/// * `base_url` - The final (post-redirect) URL of the page, used to resolve internal links
/// * `stopwords` - Words excluded from the common-word ranking
/// * `common_words` - How many of the most frequent words to keep
///
/// # Returns
///
/// * `Ok(SeoReport)` - Successfully extracted report
/// * `Err(SeoError::MissingTitle)` - The document has no `<title>` element
///
/// # Example
///
/// ```
/// use seo_checker::checker::{extract_report, StopwordSet};
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let report = extract_report(html, &base_url, &StopwordSet::english(), 10).unwrap();
/// assert_eq!(report.title, "Test");
/// assert_eq!(report.internal_links[0].url, "https://example.com/page");
/// ```
pub fn extract_report(
    html: &str,
    base_url: &Url,
    stopwords: &StopwordSet,
    common_words: usize,
) -> Result<SeoReport, SeoError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document).ok_or_else(|| SeoError::MissingTitle {
        url: base_url.to_string(),
    })?;
    let meta_description =
        extract_meta_description(&document).unwrap_or_else(|| NO_META_DESCRIPTION.to_string());
    let headings = extract_headings(&document);
    let images = extract_images(&document);
    let (internal_links, external_links) = extract_links(&document, base_url);

    let text = visible_text(&document);
    let stats = compute_word_stats(&text, stopwords, common_words);

    tracing::debug!(
        "Extracted {} headings, {} images, {} internal and {} external links, {} words",
        headings.len(),
        images.len(),
        internal_links.len(),
        external_links.len(),
        stats.word_count
    );

    Ok(SeoReport {
        title,
        meta_description,
        headings,
        images,
        internal_links,
        external_links,
        word_count: stats.word_count,
        common_words: stats.common_words,
    })
}

/// Returns the text of an element with surrounding whitespace removed
fn trimmed_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extracts the text of the first `<title>` element
///
/// An empty title is still a title; only a missing element yields `None`.
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| trimmed_text(&element))
}

/// Extracts the `content` of the first `<meta name="description">`
fn extract_meta_description(document: &Html) -> Option<String> {
    let meta_selector = Selector::parse(r#"meta[name="description"]"#).ok()?;

    let element = document.select(&meta_selector).next()?;
    match element.value().attr("content") {
        Some(content) => Some(content.trim().to_string()),
        None => {
            tracing::debug!("Meta description element has no content attribute");
            None
        }
    }
}

/// Extracts headings level by level: every h1, then every h2, through h6
fn extract_headings(document: &Html) -> Vec<Heading> {
    let mut headings = Vec::new();

    for level in 1..=MAX_HEADING_LEVEL {
        let Ok(selector) = Selector::parse(&format!("h{}", level)) else {
            continue;
        };

        for element in document.select(&selector) {
            if let Some(heading) = Heading::new(level, trimmed_text(&element)) {
                headings.push(heading);
            }
        }
    }

    headings
}

/// Extracts every `<img>` with its `src` and `alt`
fn extract_images(document: &Html) -> Vec<ImageLink> {
    let Ok(img_selector) = Selector::parse("img") else {
        return Vec::new();
    };

    document
        .select(&img_selector)
        .map(|element| ImageLink {
            src: element.value().attr("src").unwrap_or_default().to_string(),
            alt_text: element.value().attr("alt").unwrap_or_default().to_string(),
        })
        .collect()
}

/// Extracts anchors split into (internal, external) links
///
/// Anchors without an `href` are treated like an empty `href` and skipped.
/// The anchor's `alt` attribute is reported, not its text or `title`.
fn extract_links(document: &Html, base_url: &Url) -> (Vec<PageLink>, Vec<PageLink>) {
    let mut internal = Vec::new();
    let mut external = Vec::new();

    let Ok(a_selector) = Selector::parse("a") else {
        return (internal, external);
    };

    for element in document.select(&a_selector) {
        let href = element.value().attr("href").unwrap_or_default();
        let alt_text = element.value().attr("alt").unwrap_or_default().to_string();

        match classify_link(href, base_url) {
            LinkClassification::Internal(url) => internal.push(PageLink { url, alt_text }),
            LinkClassification::External(url) => external.push(PageLink { url, alt_text }),
            LinkClassification::Skipped => {
                tracing::trace!("Skipping anchor with href {:?}", href);
            }
        }
    }

    (internal, external)
}

/// Concatenates every text node outside non-visible elements
///
/// Text nodes are joined without a separator, so adjacent inline text
/// stays glued together exactly as it sits in the markup.
fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.root_element().descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| NON_VISIBLE_ELEMENTS.contains(&element.name()))
        });

        if !hidden {
            text.push_str(fragment);
        }
    }

    text
}
