//! Cross-check of manifest mod dependencies against installed content

use semver::Version;
use tracing::warn;

use crate::linker::types::DependencyUpdate;
use crate::manifest::ModDependency;
use crate::workshop::WorkshopIndex;

/// Walks the manifest's mod dependencies and reports, for each one with a
/// declared version, the highest installed version applicable to the
/// dependency's game version.
pub struct DependencyScanner<'a> {
    index: &'a dyn WorkshopIndex,
}

impl<'a> DependencyScanner<'a> {
    pub fn new(index: &'a dyn WorkshopIndex) -> Self {
        Self { index }
    }

    /// Produces one result per dependency, in manifest order.
    ///
    /// A dependency without a parseable version is logged as a warning and
    /// reported unchanged; a dependency the workshop index knows nothing
    /// about, or whose installed version is not newer, is also reported
    /// unchanged. No dependency ever aborts the scan.
    pub fn scan(
        self,
        dependencies: &'a [ModDependency],
    ) -> impl Iterator<Item = DependencyUpdate> + 'a {
        let index = self.index;
        dependencies
            .iter()
            .map(move |dependency| check_dependency(index, dependency))
    }
}

fn check_dependency(index: &dyn WorkshopIndex, dependency: &ModDependency) -> DependencyUpdate {
    let declared = dependency
        .version
        .as_deref()
        .and_then(|raw| Version::parse(raw).ok());

    let Some(declared) = declared else {
        warn!("Dependency '{}' has no valid version.", dependency.id);
        let placeholder = Version::new(0, 0, 0);
        return DependencyUpdate {
            id: dependency.id.clone(),
            declared: placeholder.clone(),
            discovered: placeholder,
        };
    };

    let installed = index.installed_version(dependency);

    let discovered = match installed {
        Some(version) if version > declared => version,
        _ => declared.clone(),
    };

    DependencyUpdate {
        id: dependency.id.clone(),
        declared,
        discovered,
    }
}
