//! Report module for SEO Checker
//!
//! This module handles:
//! - The `SeoReport` record produced by extraction
//! - Formatting the report as labeled plain-text sections
//! - Writing the report file and printing a console overview

mod summary;
mod text;
mod types;

pub use summary::print_summary;
pub use text::{format_report, write_report, NO_META_DESCRIPTION};
pub use types::{Heading, ImageLink, PageLink, SeoReport, WordStats, MAX_HEADING_LEVEL};
