//! Update scan over declared package references
//!
//! Packages are queried sequentially, one request in flight at a time, and
//! results are produced lazily in project order, then package order within a
//! project.

use futures::{Stream, StreamExt, future, stream};

use crate::linker::types::DependencyUpdate;
use crate::project::{PackageReference, Project};
use crate::registry::{NugetClient, RegistryError};

/// Scans every package reference across the tracked projects against the
/// registry and reports available updates.
pub struct UpdateResolver<'a> {
    client: &'a NugetClient,
    projects: &'a [Project],
}

impl<'a> UpdateResolver<'a> {
    pub fn new(client: &'a NugetClient, projects: &'a [Project]) -> Self {
        Self { client, projects }
    }

    /// Lazily produces one update per package that has a newer version.
    ///
    /// Within a package, entries and their version lists are scanned in the
    /// order the registry returned them; the first version strictly greater
    /// than the declared one wins and ends the scan for that package. A
    /// soft-failed query yields nothing for that package; fatal registry
    /// errors surface as `Err` items.
    pub fn scan(self) -> impl Stream<Item = Result<DependencyUpdate, RegistryError>> + 'a {
        let client = self.client;

        stream::iter(
            self.projects
                .iter()
                .flat_map(|project| project.packages.iter()),
        )
        .then(move |package| check_package(client, package))
        .filter_map(|result| future::ready(result.transpose()))
    }
}

async fn check_package(
    client: &NugetClient,
    package: &PackageReference,
) -> Result<Option<DependencyUpdate>, RegistryError> {
    let Some(entries) = client.query_package(&package.name, false).await? else {
        return Ok(None);
    };

    for entry in &entries {
        for release in &entry.versions {
            if release.version > package.version {
                return Ok(Some(DependencyUpdate {
                    id: package.name.clone(),
                    declared: package.version.clone(),
                    discovered: release.version.clone(),
                }));
            }
        }
    }

    Ok(None)
}
