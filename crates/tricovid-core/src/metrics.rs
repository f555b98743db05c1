//! Latest-observation retrieval.
//!
//! The API only pages forwards in ascending date order, so the newest point
//! is found by asking for the page count at `page_size=1` and then fetching
//! that last page.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{MetricPage, MetricPoint};

/// Result of looking up the latest point of one metric series.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The most recent observation.
    Found(MetricPoint),
    /// The series exists but holds no observations.
    Absent,
    /// Transport, status or parse failure.
    Failed(String),
}

impl FetchOutcome {
    /// Collapses absence and failure into `None`.
    pub fn into_point(self) -> Option<MetricPoint> {
        match self {
            FetchOutcome::Found(point) => Some(point),
            FetchOutcome::Absent | FetchOutcome::Failed(_) => None,
        }
    }
}

/// Fetches the most recent observation of a metric for a region.
#[derive(Debug, Clone)]
pub struct MetricFetcher {
    client: ApiClient,
}

impl MetricFetcher {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Latest point, or `None` when there is none or the lookup failed.
    pub async fn fetch_latest(&self, region: &str, metric: &str) -> Option<MetricPoint> {
        self.fetch(region, metric).await.into_point()
    }

    /// Latest point with absence and failure kept apart.
    pub async fn fetch(&self, region: &str, metric: &str) -> FetchOutcome {
        match self.try_fetch(region, metric).await {
            Ok(Some(point)) => FetchOutcome::Found(point),
            Ok(None) => {
                tracing::debug!(region, metric, "No observations");
                FetchOutcome::Absent
            }
            Err(e) => {
                tracing::warn!(region, metric, error = %e, "Failed to fetch metric");
                FetchOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_fetch(&self, region: &str, metric: &str) -> Result<Option<MetricPoint>> {
        let first: MetricPage = self
            .client
            .get_json(self.client.metric_url(region, metric, None))
            .await?;

        if first.count == 0 {
            return Ok(None);
        }

        let last: MetricPage = self
            .client
            .get_json(self.client.metric_url(region, metric, Some(first.count)))
            .await?;

        // `count > 0` with an empty last page means the series changed between calls.
        Ok(last.results.into_iter().next())
    }
}
