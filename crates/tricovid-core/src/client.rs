//! HTTP client wrapper for the dashboard API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Result, TrackerError};
use crate::DEFAULT_BASE_URL;

/// Settings applied once when the process-wide client is built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Geography-type base URL; `/geographies` is appended to it.
    pub base_url: String,
    /// Whole-request timeout. `None` disables it.
    pub timeout: Option<Duration>,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Shared handle to the dashboard API.
///
/// Cloning is cheap: the underlying `reqwest::Client` keeps its connection
/// pool behind an `Arc`, so every clone reuses the same pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        if base.cannot_be_a_base() {
            return Err(TrackerError::Configuration(format!(
                "Base URL cannot carry path segments: {}",
                config.base_url
            )));
        }

        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("tricovid/{}", crate::VERSION));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder
            .build()
            .map_err(|e| TrackerError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { inner, base })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// URL of the region listing.
    pub fn geographies_url(&self) -> Url {
        self.with_segments(&["geographies"])
    }

    /// URL of a metric series at one item per page, optionally for a given page.
    pub fn metric_url(&self, region: &str, metric: &str, page: Option<u32>) -> Url {
        let mut url = self.with_segments(&["geographies", region, "metrics", metric]);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page_size", "1");
            if let Some(page) = page {
                query.append_pair("page", &page.to_string());
            }
        }
        url
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Performs a GET request and deserializes the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");

        let response = self
            .inner
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TrackerError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TrackerError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(TrackerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| TrackerError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ClientConfig {
            base_url: base.to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_geographies_url() {
        let client = client("http://localhost:8080/api");
        assert_eq!(
            client.geographies_url().as_str(),
            "http://localhost:8080/api/geographies"
        );
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let client = client("http://localhost:8080/api/");
        assert_eq!(
            client.geographies_url().as_str(),
            "http://localhost:8080/api/geographies"
        );
    }

    #[test]
    fn test_metric_url_escapes_region() {
        let client = client("http://localhost:8080/api");
        assert_eq!(
            client.metric_url("Isle of Wight", "COVID-19_deaths_ONSByWeek", None).as_str(),
            "http://localhost:8080/api/geographies/Isle%20of%20Wight/metrics/COVID-19_deaths_ONSByWeek?page_size=1"
        );
    }

    #[test]
    fn test_metric_url_with_page() {
        let client = client("http://localhost:8080/api");
        assert_eq!(
            client.metric_url("Oxford", "m", Some(147)).as_str(),
            "http://localhost:8080/api/geographies/Oxford/metrics/m?page_size=1&page=147"
        );
    }

    #[test]
    fn test_default_base_keeps_encoded_segment() {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        let url = client.geographies_url();
        assert!(url
            .as_str()
            .ends_with("/geography_types/Lower%20Tier%20Local%20Authority/geographies"));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new(&ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        });
        assert!(matches!(result, Err(TrackerError::InvalidUrl(_))));
    }

    #[test]
    fn test_cannot_be_a_base() {
        let result = ApiClient::new(&ClientConfig {
            base_url: "mailto:someone@example.com".to_string(),
            ..ClientConfig::default()
        });
        assert!(matches!(result, Err(TrackerError::Configuration(_))));
    }
}
