//! Console overview of a finished report

use crate::report::types::SeoReport;
use std::path::Path;

/// Prints a short overview of the report to stdout
///
/// # Arguments
///
/// * `report` - The extracted SEO report
/// * `report_path` - Where the full report was written
pub fn print_summary(report: &SeoReport, report_path: &Path) {
    println!("=== SEO Check ===\n");

    println!("Title: {}", report.title);
    println!("Meta description: {}", report.meta_description);
    println!();

    println!("Overview:");
    println!("  Headings: {}", report.headings.len());
    println!(
        "  Images: {} ({} without alt text)",
        report.images.len(),
        report.images_missing_alt()
    );
    println!("  Internal links: {}", report.internal_links.len());
    println!("  External links: {}", report.external_links.len());
    println!("  Word count: {}", report.word_count);

    if let Some((word, frequency)) = report.common_words.first() {
        println!("  Most common word: {} ({})", word, frequency);
    }
    println!();

    println!("✓ Report written to: {}", report_path.display());
}
