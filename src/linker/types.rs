use semver::Version;

/// An update report for one declared dependency.
///
/// `declared` is the version currently written in the project or manifest;
/// `discovered` is the newer version found during the scan. The two are
/// equal when the scan found nothing newer to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyUpdate {
    pub id: String,
    pub declared: Version,
    pub discovered: Version,
}

impl DependencyUpdate {
    /// True when the scan found no newer version
    pub fn is_unchanged(&self) -> bool {
        self.declared == self.discovered
    }
}
