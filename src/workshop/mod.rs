//! Seam to locally installed workshop content

#[cfg(test)]
use mockall::automock;

use semver::Version;

use crate::manifest::ModDependency;

/// Lookup into the installed workshop content on this machine.
///
/// Implementations index the game's workshop download folder; the update
/// pipeline only ever reads from them.
#[cfg_attr(test, automock)]
pub trait WorkshopIndex: Send + Sync {
    /// Returns the highest installed version of the depended-upon mod that
    /// applies to the dependency's game version, or `None` if the mod is not
    /// installed or carries no version information.
    fn installed_version(&self, dependency: &ModDependency) -> Option<Version>;
}

/// Index used when no workshop folder has been scanned. Reports every mod
/// as not installed, so dependency scans fall back to inert results.
pub struct UnindexedWorkshop;

impl WorkshopIndex for UnindexedWorkshop {
    fn installed_version(&self, _dependency: &ModDependency) -> Option<Version> {
        None
    }
}
