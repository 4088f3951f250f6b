//! Plain-text report generation
//!
//! The report is one labeled section per field, each followed by a blank
//! line. The whole document is formatted in memory first so the file is
//! only created once extraction has fully succeeded.

use crate::report::types::SeoReport;
use crate::SeoError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Placeholder written when a page has no meta description
pub const NO_META_DESCRIPTION: &str = "N/A";

/// Writes a report to `output_path`, replacing any existing file
///
/// # Arguments
///
/// * `report` - The extracted SEO report
/// * `output_path` - Path of the `.txt` file to write
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(SeoError::Write)` - The file could not be created or written
pub fn write_report(report: &SeoReport, output_path: &Path) -> Result<(), SeoError> {
    let text = format_report(report);

    let write_err = |source| SeoError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let mut file = File::create(output_path).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    tracing::debug!(
        "Wrote {} bytes to {}",
        text.len(),
        output_path.display()
    );

    Ok(())
}

/// Formats a report as labeled plain-text sections
pub fn format_report(report: &SeoReport) -> String {
    let mut out = String::new();

    out.push_str("Title:\n");
    out.push_str(&format!("{}\n", report.title));
    out.push('\n');

    out.push_str("Meta Description:\n");
    out.push_str(&format!("{}\n", report.meta_description));
    out.push('\n');

    out.push_str("Headings:\n");
    for heading in &report.headings {
        out.push_str(&format!("H{}: {}\n", heading.level(), heading.text));
    }
    out.push('\n');

    out.push_str("Image Links with Alt Text:\n");
    for image in &report.images {
        out.push_str(&format!("Image Source: {}\n", image.src));
        out.push_str(&format!("Alt Text: {}\n", image.alt_text));
    }
    out.push('\n');

    out.push_str("Internal Links with Alt Text:\n");
    for link in &report.internal_links {
        out.push_str(&format!("URL: {}\n", link.url));
        out.push_str(&format!("Alt Text: {}\n", link.alt_text));
    }
    out.push('\n');

    out.push_str("External Links with Alt Text:\n");
    for link in &report.external_links {
        out.push_str(&format!("URL: {}\n", link.url));
        out.push_str(&format!("Alt Text: {}\n", link.alt_text));
    }
    out.push('\n');

    out.push_str("Word Count:\n");
    out.push_str(&format!("{}\n", report.word_count));
    out.push('\n');

    out.push_str("Common Words:\n");
    for (word, frequency) in &report.common_words {
        out.push_str(&format!("{}: {}\n", word, frequency));
    }
    out.push('\n');

    out
}
