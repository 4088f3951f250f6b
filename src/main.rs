//! SEO Checker main entry point
//!
//! This is the command-line interface for the single-page SEO checker.

use anyhow::Context;
use clap::Parser;
use seo_checker::checker::check_url;
use seo_checker::config::{load_config, validate, Config};
use seo_checker::report::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// SEO Checker: on-page SEO signals for a single URL
///
/// Fetches the page, extracts its title, meta description, headings,
/// images, links and most common words, and writes them to
/// `{host}.txt`.
#[derive(Parser, Debug)]
#[command(name = "seo-checker")]
#[command(version)]
#[command(about = "Extract on-page SEO signals from a web page", long_about = None)]
struct Cli {
    /// URL of the page to check
    #[arg(value_name = "URL", env = "SEO_CHECKER_URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory to write the report into (overrides config)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Fail on a non-2xx HTTP response instead of parsing it anyway
    #[arg(long)]
    strict_status: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    match check_url(&cli.url, &config).await {
        Ok(outcome) => {
            tracing::info!("Check of {} completed", cli.url);
            if !cli.quiet {
                print_summary(&outcome.report, &outcome.report_path);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Check failed: {}", e);
            Err(e).with_context(|| format!("failed to check {}", cli.url))
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seo_checker=info,warn"),
            1 => EnvFilter::new("seo_checker=debug,info"),
            2 => EnvFilter::new("seo_checker=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file, if any, and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.report.output_dir = dir.clone();
    }
    if cli.strict_status {
        config.fetch.strict_status = true;
    }

    validate(&config).context("invalid configuration")?;

    Ok(config)
}
