//! Wire and display types.

use serde::{Deserialize, Serialize};

/// One administrative area from the geographies listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Region {
    pub name: String,
}

/// A single observation of a metric.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetricPoint {
    pub metric_value: f64,
    /// ISO date (`YYYY-MM-DD`), kept as sent.
    pub date: String,
}

impl MetricPoint {
    /// The value in decimal string form.
    ///
    /// Whole numbers keep one decimal place (`147.0`) so weekly counts and
    /// percentages read the same way.
    pub fn display_value(&self) -> String {
        let value = self.metric_value;
        if value.is_finite() && value.fract() == 0.0 {
            format!("{:.1}", value)
        } else {
            value.to_string()
        }
    }
}

/// One page of a metric series.
///
/// With `page_size=1`, `count` is the number of observations in the series.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetricPage {
    pub count: u32,
    #[serde(default)]
    pub results: Vec<MetricPoint>,
}

/// Text shown in the Cases and Deaths cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub case_value: String,
    pub case_date: String,
    pub death_value: String,
    pub death_date: String,
}

impl DisplayRecord {
    fn new(case_value: &str, case_date: &str, death_value: &str, death_date: &str) -> Self {
        Self {
            case_value: case_value.to_string(),
            case_date: case_date.to_string(),
            death_value: death_value.to_string(),
            death_date: death_date.to_string(),
        }
    }

    /// Combines the latest case and death observations.
    pub fn from_points(cases: &MetricPoint, deaths: &MetricPoint) -> Self {
        Self {
            case_value: cases.display_value(),
            case_date: cases.date.clone(),
            death_value: deaths.display_value(),
            death_date: deaths.date.clone(),
        }
    }

    /// Placeholder shown before the first selection.
    pub fn prompt() -> Self {
        Self::new("Press", "To", "Enter", "Search")
    }

    /// Sentinel for a region with no data for at least one metric.
    pub fn no_data() -> Self {
        Self::new("invalid", "try", "location", "again")
    }

    /// Sentinel for a failed fetch, carrying the error message.
    pub fn fetch_error(message: &str) -> Self {
        Self::new("error", message, "error", "")
    }

    pub fn is_no_data(&self) -> bool {
        *self == Self::no_data()
    }

    pub fn is_error(&self) -> bool {
        self.case_value == "error" && self.death_value == "error" && self.death_date.is_empty()
    }
}
