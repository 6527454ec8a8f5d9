//! Mod manifest model and loader
//!
//! The manifest describes the mod being developed: its identity, the game
//! versions it supports, and the mods it depends on. Only the parts the
//! update pipeline consumes are modelled here; presentation-oriented fields
//! (load folders, load order hints) are handled by the packaging stage.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Manifest file for the mod under development
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub links: Vec<ManifestLink>,
    #[serde(default)]
    pub supported_versions: Vec<SupportedVersion>,
    #[serde(default)]
    pub dependencies: Vec<ModDependency>,
}

/// A link provided by the mod author for users
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ManifestLink {
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub link: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkType {
    Source,
    Website,
    Documentation,
}

/// A game version the mod contains content for
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SupportedVersion {
    pub version: String,
    pub status: SupportStatus,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SupportStatus {
    Supported,
    Maintenance,
    Unsupported,
}

/// A mod the mod under development depends upon.
///
/// `version` is informative only; the game has no use for it, so it may be
/// absent. `game_version` narrows the dependency to specific game releases.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModDependency {
    pub id: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub game_version: Option<String>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Loads a manifest from disk
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = std::fs::read_to_string(path)?;

    Ok(serde_yaml::from_str(&content)?)
}
