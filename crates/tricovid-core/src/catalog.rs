//! Region listing.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Region;

/// Lists the region names known to the API.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    client: ApiClient,
}

impl RegionCatalog {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Region names in response order, or an empty list on any failure.
    ///
    /// An empty list means "no regions available yet"; callers that need to
    /// tell a failure apart use [`RegionCatalog::try_list_regions`].
    pub async fn list_regions(&self) -> Vec<String> {
        match self.try_list_regions().await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load regions");
                Vec::new()
            }
        }
    }

    /// Region names in response order.
    pub async fn try_list_regions(&self) -> Result<Vec<String>> {
        let regions: Vec<Region> = self.client.get_json(self.client.geographies_url()).await?;
        tracing::debug!(count = regions.len(), "Loaded regions");
        Ok(regions.into_iter().map(|r| r.name).collect())
    }
}
