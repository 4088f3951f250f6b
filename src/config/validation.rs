use crate::config::types::{Config, FetchConfig, ReportConfig, StopwordConfig};
use crate::ConfigError;

/// Upper bound for the number of reported common words
const MAX_COMMON_WORDS: usize = 100;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_report_config(&config.report)?;
    validate_stopword_config(&config.stopwords)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates report configuration
fn validate_report_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output-dir cannot be empty".to_string(),
        ));
    }

    if config.common_words < 1 || config.common_words > MAX_COMMON_WORDS {
        return Err(ConfigError::Validation(format!(
            "common-words must be between 1 and {}, got {}",
            MAX_COMMON_WORDS, config.common_words
        )));
    }

    Ok(())
}

/// Validates extra stopwords: each must be a single non-empty token
fn validate_stopword_config(config: &StopwordConfig) -> Result<(), ConfigError> {
    for word in &config.extra {
        if word.is_empty() {
            return Err(ConfigError::Validation(
                "extra stopwords cannot be empty".to_string(),
            ));
        }

        if word.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "extra stopword '{}' must not contain whitespace",
                word
            )));
        }
    }

    Ok(())
}
