//! TriCovid Core Library
//!
//! Region listing and latest-metric retrieval against the UKHSA dashboard API,
//! plus the combining step that turns two metric series into a display record.

pub mod catalog;
pub mod client;
pub mod error;
pub mod metrics;
pub mod models;
pub mod record;
pub mod search;
pub mod selection;

pub use catalog::RegionCatalog;
pub use client::{ApiClient, ClientConfig};
pub use error::{Result, TrackerError};
pub use metrics::{FetchOutcome, MetricFetcher};
pub use models::{DisplayRecord, MetricPage, MetricPoint, Region};
pub use record::{RecordOutcome, RecordService};
pub use selection::{Selection, SelectionTracker};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base: COVID-19 topic, Lower Tier Local Authority geographies.
pub const DEFAULT_BASE_URL: &str = "https://api.ukhsa-dashboard.data.gov.uk/themes/infectious_disease/sub_themes/respiratory/topics/COVID-19/geography_types/Lower%20Tier%20Local%20Authority";

/// Weekly deaths registered by the ONS.
pub const DEATH_METRIC: &str = "COVID-19_deaths_ONSByWeek";

/// Seven-day rolling test positivity.
pub const CASE_METRIC: &str = "COVID-19_testing_positivity7DayRolling";
