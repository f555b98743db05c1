//! Configuration loading and resolution.
//!
//! Settings come from `~/.tricovid/config.huml` with priority order:
//! CLI flags > environment variables > config file > defaults.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tricovid_core::search::DEFAULT_SUGGESTION_LIMIT;
use tricovid_core::{ClientConfig, CASE_METRIC, DEATH_METRIC, DEFAULT_BASE_URL};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TRICOVID_CONFIG";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "TRICOVID_BASE_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration loaded from config.huml.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Geography-type base URL of the dashboard API.
    pub base_url: String,
    /// Request timeout in seconds; 0 disables it.
    pub timeout_secs: u64,
    /// Metric shown in the Deaths card.
    pub death_metric: String,
    /// Metric shown in the Cases card.
    pub case_metric: String,
    /// Maximum autocomplete suggestions.
    pub suggestion_limit: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            death_metric: DEATH_METRIC.to_string(),
            case_metric: CASE_METRIC.to_string(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

/// Configuration after applying priority rules.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub client: ClientConfig,
    pub death_metric: String,
    pub case_metric: String,
    pub suggestion_limit: usize,
}

/// Returns the config directory path (~/.tricovid).
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".tricovid"))
        .context("Could not determine home directory")
}

/// Returns the default config file path (~/.tricovid/config.huml).
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.huml"))
}

/// Returns the config path in effect, honouring `TRICOVID_CONFIG`.
pub fn config_path() -> Result<PathBuf> {
    match std::env::var(CONFIG_ENV) {
        Ok(p) => Ok(PathBuf::from(p)),
        Err(_) => default_config_path(),
    }
}

/// Load configuration from the config file.
///
/// Returns `Ok(None)` if the config file doesn't exist.
/// Returns an error if the file exists but is invalid.
pub fn load_config() -> Result<Option<TrackerConfig>> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let content =
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let config: TrackerConfig = huml_rs::serde::from_str(&content)
        .with_context(|| format!("Invalid HUML in {}", path.display()))?;

    validate_config(&config)?;

    Ok(Some(config))
}

fn validate_config(config: &TrackerConfig) -> Result<()> {
    if config.base_url.trim().is_empty() {
        bail!("base_url must not be empty");
    }
    if config.death_metric.trim().is_empty() || config.case_metric.trim().is_empty() {
        bail!("death_metric and case_metric must not be empty");
    }
    if config.suggestion_limit == 0 {
        bail!("suggestion_limit must be at least 1");
    }
    Ok(())
}

/// Resolve configuration by applying priority rules.
///
/// Priority order (highest to lowest):
/// 1. CLI flags (`--base-url`, `--timeout`)
/// 2. Environment variables (`TRICOVID_BASE_URL`)
/// 3. Config file
/// 4. Hardcoded defaults
pub fn resolve_config(
    base_url_flag: Option<&str>,
    timeout_flag: Option<u64>,
    file_config: Option<TrackerConfig>,
) -> ResolvedConfig {
    let config = file_config.unwrap_or_default();

    let mut base_url = config.base_url;
    if let Ok(env_url) = std::env::var(BASE_URL_ENV) {
        base_url = env_url;
    }
    if let Some(url) = base_url_flag {
        base_url = url.to_string();
    }

    let timeout_secs = timeout_flag.unwrap_or(config.timeout_secs);

    ResolvedConfig {
        client: ClientConfig {
            base_url,
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            connect_timeout: CONNECT_TIMEOUT,
        },
        death_metric: config.death_metric,
        case_metric: config.case_metric,
        suggestion_limit: config.suggestion_limit,
    }
}
