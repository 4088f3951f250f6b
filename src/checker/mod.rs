//! Checker module: the fetch, extract and report pipeline
//!
//! This module contains the core logic of a run:
//! - HTTP fetching of the target page
//! - HTML extraction of SEO signals
//! - Word statistics with a bundled stopword set
//! - Writing the report file

mod extractor;
mod fetcher;
mod stopwords;
mod words;

pub use extractor::extract_report;
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use stopwords::StopwordSet;
pub use words::compute_word_stats;

use crate::config::{validate, Config};
use crate::report::{write_report, SeoReport};
use crate::url::{parse_target_url, report_filename};
use crate::SeoError;
use std::path::PathBuf;

/// Outcome of a successful check
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// The extracted report
    pub report: SeoReport,

    /// Where the report was written
    pub report_path: PathBuf,

    /// HTTP status of the fetched page
    pub status_code: u16,
}

/// Runs a complete check of one URL
///
/// This is the main entry point. It will:
/// 1. Validate the configuration and the URL
/// 2. Fetch the page (one GET, redirects followed)
/// 3. Extract the SEO report
/// 4. Write `{host}.txt` into the configured output directory
///
/// Any failure aborts the run. The report file is only created after
/// extraction succeeded.
///
/// # Arguments
///
/// * `url` - The URL to check, as given by the user
/// * `config` - The checker configuration
///
/// # Returns
///
/// * `Ok(CheckOutcome)` - Report extracted and written
/// * `Err(SeoError::Config)` - The configuration is invalid
/// * `Err(SeoError)` - The run failed
pub async fn check_url(url: &str, config: &Config) -> Result<CheckOutcome, SeoError> {
    validate(config)?;

    let target = parse_target_url(url)?;

    let client = build_http_client(&config.fetch)?;

    tracing::info!("Fetching {}", target);
    let page = fetch_page(&client, &target).await?;

    if !page.is_success() {
        if config.fetch.strict_status {
            return Err(SeoError::HttpStatus {
                url: page.final_url.to_string(),
                status: page.status_code,
            });
        }
        tracing::warn!(
            "HTTP {} returned for {}, parsing body anyway",
            page.status_code,
            page.final_url
        );
    }

    if !page.is_html() {
        tracing::warn!(
            "Content-Type {:?} is not HTML, parsing body anyway",
            page.content_type.as_deref().unwrap_or_default()
        );
    }

    let stopwords = StopwordSet::english().with_extra(&config.stopwords.extra);
    tracing::debug!("Using {} stopwords", stopwords.len());

    tracing::info!("Extracting SEO signals");
    let report = extract_report(
        &page.body,
        &page.final_url,
        &stopwords,
        config.report.common_words,
    )?;

    let report_path = config.report.output_dir.join(report_filename(&target));
    tracing::info!("Writing report to {}", report_path.display());
    write_report(&report, &report_path)?;

    Ok(CheckOutcome {
        report,
        report_path,
        status_code: page.status_code,
    })
}
