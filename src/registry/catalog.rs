//! Lazy resolution of the registry's search endpoint
//!
//! The endpoint is discovered from the root index document on first use and
//! cached for the lifetime of the resolver. Resolution failures leave the
//! cache unset so a later call retries from scratch.

use reqwest::Url;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::SEARCH_QUERY_SERVICE;
use crate::registry::error::RegistryError;
use crate::registry::types::ServiceIndex;

/// Resolves the search endpoint from the registry's service index.
///
/// Concurrent first-time callers are serialized by the cell: exactly one of
/// them performs the root-index fetch, the rest wait and observe its result.
pub struct CatalogResolver {
    client: reqwest::Client,
    index_url: String,
    endpoint: OnceCell<Url>,
}

impl CatalogResolver {
    pub fn new(client: reqwest::Client, index_url: &str) -> Self {
        Self {
            client,
            index_url: index_url.to_string(),
            endpoint: OnceCell::new(),
        }
    }

    /// Returns the search endpoint, fetching the root index if no earlier
    /// call has resolved it yet. Idempotent across repeated calls.
    pub async fn resolve(&self) -> Result<&Url, RegistryError> {
        self.endpoint
            .get_or_try_init(|| self.fetch_endpoint())
            .await
    }

    async fn fetch_endpoint(&self) -> Result<Url, RegistryError> {
        let response = self.client.get(&self.index_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::ServiceUnavailable(status));
        }

        let index: ServiceIndex = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        let resource = index
            .resources
            .iter()
            .find(|resource| resource.resource_type == SEARCH_QUERY_SERVICE)
            .ok_or_else(|| {
                RegistryError::InvalidResponse(format!(
                    "service index has no {SEARCH_QUERY_SERVICE} resource"
                ))
            })?;

        let id = resource.id.as_deref().ok_or_else(|| {
            RegistryError::InvalidResponse(format!(
                "the 'id' property is missing from the {SEARCH_QUERY_SERVICE} resource"
            ))
        })?;

        let endpoint = Url::parse(id).map_err(|e| {
            RegistryError::InvalidResponse(format!(
                "{SEARCH_QUERY_SERVICE} id '{id}' is not a valid URL: {e}"
            ))
        })?;

        debug!("Resolved search endpoint: {}", endpoint);

        Ok(endpoint)
    }
}
