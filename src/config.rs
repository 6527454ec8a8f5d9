//! Constants shared across the build pipeline

/// Root index document of the official NuGet package registry
pub const NUGET_INDEX_URL: &str = "https://api.nuget.org/v3/index.json";

/// `@type` of the service-index resource that accepts search queries
pub const SEARCH_QUERY_SERVICE: &str = "SearchQueryService";

/// User agent sent with every registry request
pub const USER_AGENT: &str = "rimlink";

/// Name of the mod manifest file expected at the mod root
pub const MANIFEST_FILE_NAME: &str = "manifest.yaml";

/// Marker file for centrally declared package references
pub const CENTRAL_PACKAGES_FILE_NAME: &str = "Directory.Packages.props";
