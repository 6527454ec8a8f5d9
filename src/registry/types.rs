//! Serde mirror of the NuGet v3 wire schema

use semver::Version;
use serde::Deserialize;

/// Root index document listing the registry's typed resources
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceIndex {
    pub resources: Vec<ServiceResource>,
}

/// One resource entry from the service index
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceResource {
    #[serde(rename = "@type")]
    pub resource_type: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Response to a package search query
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "@context")]
    pub context: SearchContext,
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    pub data: Vec<SearchEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchContext {
    #[serde(rename = "@base")]
    pub base: String,
    #[serde(rename = "@vocab")]
    pub vocab: String,
}

/// One package matched by a search query.
///
/// `versions` is kept in the order the registry returned it; the registry
/// does not guarantee that order is sorted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    #[serde(rename = "@id")]
    pub id_url: String,
    #[serde(rename = "@type", default)]
    pub entry_type: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    pub id: String,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub package_types: Vec<PackageType>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub total_downloads: u64,
    #[serde(default)]
    pub verified: bool,
    pub version: Version,
    #[serde(default)]
    pub versions: Vec<EntryVersion>,
    #[serde(default)]
    pub vulnerabilities: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageType {
    pub name: String,
}

/// One published version of a matched package
#[derive(Debug, Clone, Deserialize)]
pub struct EntryVersion {
    #[serde(rename = "@id")]
    pub id_url: String,
    #[serde(default)]
    pub downloads: u64,
    pub version: Version,
}
