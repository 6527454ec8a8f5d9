//! Package search queries against the NuGet registry

use tracing::error;

use crate::config::{NUGET_INDEX_URL, USER_AGENT};
use crate::registry::catalog::CatalogResolver;
use crate::registry::error::RegistryError;
use crate::registry::types::{SearchEntry, SearchResponse};

/// A mini client for the NuGet package registry.
///
/// Resolves the search endpoint lazily on first query and shares the
/// resolved endpoint across all later queries on the same instance.
pub struct NugetClient {
    client: reqwest::Client,
    catalog: CatalogResolver,
}

impl NugetClient {
    /// Creates a client against a custom root index URL
    pub fn with_index_url(index_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            catalog: CatalogResolver::new(client.clone(), index_url),
            client,
        }
    }

    /// Queries the registry for packages matching `package_name`.
    ///
    /// A failed search for this one package is downgraded: it is logged and
    /// reported as `Ok(None)`. Catalog-resolution and transport failures
    /// propagate.
    pub async fn query_package(
        &self,
        package_name: &str,
        include_prereleases: bool,
    ) -> Result<Option<Vec<SearchEntry>>, RegistryError> {
        match self.search(package_name, include_prereleases).await {
            Ok(response) => Ok(Some(response.data)),
            Err(e @ RegistryError::PackageQuery { .. }) => {
                error!("NuGet query failed: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn search(
        &self,
        package_name: &str,
        include_prereleases: bool,
    ) -> Result<SearchResponse, RegistryError> {
        let endpoint = self.catalog.resolve().await?;

        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", package_name)
            .append_pair("prerelease", if include_prereleases { "true" } else { "false" });

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::PackageQuery {
                package: package_name.to_string(),
                status,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))
    }
}

impl Default for NugetClient {
    fn default() -> Self {
        Self::with_index_url(NUGET_INDEX_URL)
    }
}
