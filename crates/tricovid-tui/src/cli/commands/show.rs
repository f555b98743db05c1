//! Region figures commands.

use std::future::Future;
use std::time::Duration;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tricovid_core::{DisplayRecord, FetchOutcome, RecordOutcome};

use crate::cli::output::{print_key_value, print_section, print_warning};
use crate::shared::services::Services;

/// Runs `future` behind a spinner on stderr.
async fn with_spinner<T>(message: String, future: impl Future<Output = T>) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = future.await;
    spinner.finish_and_clear();
    output
}

pub async fn show_region(services: &Services, region: &str) -> Result<()> {
    let outcome = with_spinner(
        format!("Fetching latest figures for {}...", region),
        services.records.fetch_outcome(region),
    )
    .await;

    match outcome {
        RecordOutcome::Metrics { .. } => {
            let record = DisplayRecord::from(outcome);
            println!("{}", region);
            print_section("Cases");
            print_key_value("Positivity", &record.case_value);
            print_key_value("Date", &record.case_date);
            print_section("Deaths");
            print_key_value("Weekly deaths", &record.death_value);
            print_key_value("Date", &record.death_date);
            Ok(())
        }
        RecordOutcome::NoData => {
            print_warning(&format!(
                "No data for '{}'. Try another location.",
                region
            ));
            Ok(())
        }
        RecordOutcome::Error(message) => bail!("Failed to fetch figures for '{}': {}", region, message),
    }
}

pub async fn show_latest(services: &Services, region: &str, metric: &str) -> Result<()> {
    let outcome = with_spinner(
        format!("Fetching {} for {}...", metric, region),
        services.fetcher.fetch(region, metric),
    )
    .await;

    match outcome {
        FetchOutcome::Found(point) => {
            print_key_value("Region", region);
            print_key_value("Metric", metric);
            print_key_value("Value", &point.display_value());
            print_key_value("Date", &point.date);
            Ok(())
        }
        FetchOutcome::Absent => {
            print_warning(&format!("No observations of {} for '{}'.", metric, region));
            Ok(())
        }
        FetchOutcome::Failed(message) => bail!("Failed to fetch {}: {}", metric, message),
    }
}
