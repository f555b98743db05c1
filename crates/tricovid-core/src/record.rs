//! Combining the death and case series into one display record.

use crate::client::ApiClient;
use crate::metrics::{FetchOutcome, MetricFetcher};
use crate::models::{DisplayRecord, MetricPoint};
use crate::{CASE_METRIC, DEATH_METRIC};

/// What a region selection produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Metrics {
        cases: MetricPoint,
        deaths: MetricPoint,
    },
    /// At least one series had no observations.
    NoData,
    /// At least one lookup failed.
    Error(String),
}

impl RecordOutcome {
    /// Combines the two lookups. Failures win over absence, deaths are
    /// checked before cases, and a partial pair is never kept.
    pub fn combine(deaths: FetchOutcome, cases: FetchOutcome) -> Self {
        match (deaths, cases) {
            (FetchOutcome::Found(deaths), FetchOutcome::Found(cases)) => {
                RecordOutcome::Metrics { cases, deaths }
            }
            (FetchOutcome::Failed(message), _) | (_, FetchOutcome::Failed(message)) => {
                RecordOutcome::Error(message)
            }
            _ => RecordOutcome::NoData,
        }
    }
}

impl From<RecordOutcome> for DisplayRecord {
    fn from(outcome: RecordOutcome) -> Self {
        match outcome {
            RecordOutcome::Metrics { cases, deaths } => DisplayRecord::from_points(&cases, &deaths),
            RecordOutcome::NoData => DisplayRecord::no_data(),
            RecordOutcome::Error(message) => DisplayRecord::fetch_error(&message),
        }
    }
}

/// Fetches both metrics for a region and combines them.
#[derive(Debug, Clone)]
pub struct RecordService {
    fetcher: MetricFetcher,
    death_metric: String,
    case_metric: String,
}

impl RecordService {
    /// Uses the default death and case metrics.
    pub fn new(client: ApiClient) -> Self {
        Self::with_metrics(client, DEATH_METRIC, CASE_METRIC)
    }

    pub fn with_metrics(client: ApiClient, death_metric: &str, case_metric: &str) -> Self {
        Self {
            fetcher: MetricFetcher::new(client),
            death_metric: death_metric.to_string(),
            case_metric: case_metric.to_string(),
        }
    }

    pub fn death_metric(&self) -> &str {
        &self.death_metric
    }

    pub fn case_metric(&self) -> &str {
        &self.case_metric
    }

    /// Display record for a region, or one of the sentinels.
    pub async fn fetch_record(&self, region: &str) -> DisplayRecord {
        self.fetch_outcome(region).await.into()
    }

    /// Both lookups run concurrently on the calling task.
    pub async fn fetch_outcome(&self, region: &str) -> RecordOutcome {
        let (deaths, cases) = tokio::join!(
            self.fetcher.fetch(region, &self.death_metric),
            self.fetcher.fetch(region, &self.case_metric),
        );
        let outcome = RecordOutcome::combine(deaths, cases);
        let kind = match &outcome {
            RecordOutcome::Metrics { .. } => "metrics",
            RecordOutcome::NoData => "no_data",
            RecordOutcome::Error(_) => "error",
        };
        tracing::info!(region, outcome = kind, "Fetched record");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(value: f64, date: &str) -> FetchOutcome {
        FetchOutcome::Found(MetricPoint {
            metric_value: value,
            date: date.to_string(),
        })
    }

    #[test]
    fn test_both_present() {
        let outcome = RecordOutcome::combine(found(3.2, "2024-05-01"), found(7.5, "2024-05-03"));
        let record = DisplayRecord::from(outcome);
        assert_eq!(record.death_value, "3.2");
        assert_eq!(record.death_date, "2024-05-01");
        assert_eq!(record.case_value, "7.5");
        assert_eq!(record.case_date, "2024-05-03");
    }

    #[test]
    fn test_any_absent_is_no_data() {
        let cases = [
            (found(1.0, "2024-01-01"), FetchOutcome::Absent),
            (FetchOutcome::Absent, found(1.0, "2024-01-01")),
            (FetchOutcome::Absent, FetchOutcome::Absent),
        ];
        for (deaths, cases) in cases {
            let record = DisplayRecord::from(RecordOutcome::combine(deaths, cases));
            assert_eq!(record, DisplayRecord::no_data());
        }
    }

    #[test]
    fn test_failure_carries_message() {
        let outcome = RecordOutcome::combine(
            found(1.0, "2024-01-01"),
            FetchOutcome::Failed("API error 500: oops".to_string()),
        );
        assert_eq!(outcome, RecordOutcome::Error("API error 500: oops".to_string()));

        let record = DisplayRecord::from(outcome);
        assert!(record.is_error());
        assert_eq!(record.case_date, "API error 500: oops");
    }

    #[test]
    fn test_failure_wins_over_absence() {
        let outcome = RecordOutcome::combine(
            FetchOutcome::Absent,
            FetchOutcome::Failed("timed out".to_string()),
        );
        assert_eq!(outcome, RecordOutcome::Error("timed out".to_string()));
    }

    #[test]
    fn test_death_failure_reported_first() {
        let outcome = RecordOutcome::combine(
            FetchOutcome::Failed("deaths".to_string()),
            FetchOutcome::Failed("cases".to_string()),
        );
        assert_eq!(outcome, RecordOutcome::Error("deaths".to_string()));
    }
}
