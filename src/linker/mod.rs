//! Update resolution over declared packages and mod dependencies
//!
//! # Modules
//!
//! - [`resolver`]: registry scan over declared package references
//! - [`scanner`]: installed-content cross-check over mod dependencies
//! - [`types`]: the update result type

pub mod resolver;
pub mod scanner;
pub mod types;

pub use resolver::UpdateResolver;
pub use scanner::DependencyScanner;
pub use types::DependencyUpdate;

use std::path::{Path, PathBuf};

use futures::Stream;
use thiserror::Error;
use tracing::error;

use crate::config::MANIFEST_FILE_NAME;
use crate::manifest::{Manifest, ManifestError, load_manifest};
use crate::project::{Project, ProjectError, discover_projects};
use crate::registry::{NugetClient, RegistryError};
use crate::workshop::WorkshopIndex;

#[derive(Debug, Error)]
pub enum LinkerError {
    #[error("Manifest file {0} does not exist")]
    MissingManifest(PathBuf),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Project(#[from] ProjectError),
}

/// Facade over the update pipeline for one mod root.
///
/// Loading the manifest and discovering the projects happens once, up front;
/// the scans themselves borrow the loaded state and never mutate it.
pub struct Linker {
    manifest: Manifest,
    projects: Vec<Project>,
    client: NugetClient,
}

impl Linker {
    pub fn from_mod_root(mod_root: &Path) -> Result<Self, LinkerError> {
        Self::with_client(mod_root, NugetClient::default())
    }

    /// Builds a linker against a specific registry client
    pub fn with_client(mod_root: &Path, client: NugetClient) -> Result<Self, LinkerError> {
        let manifest_path = mod_root.join(MANIFEST_FILE_NAME);

        if !manifest_path.exists() {
            error!(
                "Manifest file {} does not exist. Aborting..",
                manifest_path.display()
            );
            return Err(LinkerError::MissingManifest(manifest_path));
        }

        Ok(Self {
            manifest: load_manifest(&manifest_path)?,
            projects: discover_projects(mod_root)?,
            client,
        })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Lazy scan of every declared package reference for available updates
    pub fn update_packages(
        &self,
    ) -> impl Stream<Item = Result<DependencyUpdate, RegistryError>> + '_ {
        UpdateResolver::new(&self.client, &self.projects).scan()
    }

    /// Cross-check of the manifest's mod dependencies against installed
    /// workshop content
    pub fn update_dependencies<'a>(
        &'a self,
        index: &'a dyn WorkshopIndex,
    ) -> impl Iterator<Item = DependencyUpdate> + 'a {
        DependencyScanner::new(index).scan(&self.manifest.dependencies)
    }
}
