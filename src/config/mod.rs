//! Configuration module for SEO Checker
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so running without a file
//! is equivalent to loading an empty one.
//!
//! # Example
//!
//! ```no_run
//! use seo_checker::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seo-checker.toml")).unwrap();
//! println!("Reports go to: {}", config.report.output_dir.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, ReportConfig, StopwordConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
