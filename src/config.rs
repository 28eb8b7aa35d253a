//! Runtime configuration loaded from an optional YAML file.
//!
//! Every field has a default, so a partial file (or no file at all) is valid.
//! Command-line flags are applied on top by [`crate::cli::Cli::apply_overrides`].
//!
//! ```yaml
//! user_agent: "link_harvest/0.1"
//! timeout_secs: 30
//! max_retries: 3
//! base_delay_ms: 500
//! max_delay_ms: 10000
//! news_limit: 10
//! intro_fallback: "Intro не указано"
//! ```

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;
use tracing::{info, instrument};

/// Text used for a news entry whose intro paragraph is missing.
pub const DEFAULT_INTRO_FALLBACK: &str = "Intro не указано";

/// Settings shared by the fetch layer and the extractors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Retries after the first failed attempt.
    pub max_retries: usize,
    /// Initial backoff delay; doubles on every retry.
    pub base_delay_ms: u64,
    /// Upper bound on a single backoff delay (before jitter).
    pub max_delay_ms: u64,
    /// Number of news entries to export.
    pub news_limit: usize,
    /// Intro text used when an entry has none.
    pub intro_fallback: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 10_000,
            news_limit: 10,
            intro_fallback: DEFAULT_INTRO_FALLBACK.to_string(),
        }
    }
}

impl ScrapeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

/// Parse a configuration from YAML text.
pub fn parse_config(yaml: &str) -> Result<ScrapeConfig, Box<dyn Error>> {
    if yaml.trim().is_empty() {
        return Ok(ScrapeConfig::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load the configuration file at `path`, or the defaults when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid YAML for
/// [`ScrapeConfig`].
#[instrument(level = "info")]
pub async fn load_config(path: Option<&str>) -> Result<ScrapeConfig, Box<dyn Error>> {
    let Some(path) = path else {
        info!("No config file given; using defaults");
        return Ok(ScrapeConfig::default());
    };
    let yaml = tokio::fs::read_to_string(path).await?;
    let config = parse_config(&yaml)?;
    info!(config_path = path, "Loaded configuration");
    Ok(config)
}
