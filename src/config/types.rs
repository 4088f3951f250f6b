use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for SEO Checker
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub report: ReportConfig,
    pub stopwords: StopwordConfig,
}

/// HTTP fetch behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FetchConfig {
    /// User-Agent header sent with the request
    pub user_agent: String,

    /// Request timeout in seconds; the HTTP client default applies when unset
    pub timeout_secs: Option<u64>,

    /// Fail the run on a non-2xx response instead of parsing it anyway
    pub strict_status: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
            strict_status: false,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReportConfig {
    /// Directory the `{host}.txt` report is written into
    pub output_dir: PathBuf,

    /// How many of the most frequent words to report
    pub common_words: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            common_words: 10,
        }
    }
}

/// Additional stopwords merged into the bundled English list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StopwordConfig {
    pub extra: Vec<String>,
}
