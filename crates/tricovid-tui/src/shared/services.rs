//! The process-wide API handle and the components built on it.

use anyhow::{Context, Result};
use tricovid_core::{ApiClient, MetricFetcher, RecordService, RegionCatalog};

use super::config::ResolvedConfig;

/// Components sharing one HTTP client.
#[derive(Debug, Clone)]
pub struct Services {
    pub catalog: RegionCatalog,
    pub fetcher: MetricFetcher,
    pub records: RecordService,
    pub suggestion_limit: usize,
}

impl Services {
    pub fn new(config: &ResolvedConfig) -> Result<Self> {
        let client = ApiClient::new(&config.client).context("Failed to create API client")?;
        tracing::debug!(base_url = client.base_url(), "API client ready");

        Ok(Self {
            catalog: RegionCatalog::new(client.clone()),
            fetcher: MetricFetcher::new(client.clone()),
            records: RecordService::with_metrics(client, &config.death_metric, &config.case_metric),
            suggestion_limit: config.suggestion_limit,
        })
    }
}
