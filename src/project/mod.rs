//! C# project discovery and package-reference extraction
//!
//! Projects live one directory deep under the mod's `src` folder, one
//! `.csproj` per directory. Package references are `PackageReference` or
//! `Reference` nodes inside `ItemGroup` elements, carrying `Include` and
//! `Version` attributes. A `Directory.Packages.props` file at the mod root
//! contributes centrally declared references as one extra project.

use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;
use quick_xml::events::attributes::AttrError;
use semver::Version;
use thiserror::Error;
use tracing::warn;

use crate::config::CENTRAL_PACKAGES_FILE_NAME;

/// Tags accepted as package-reference declarations
const REFERENCE_TAGS: [&[u8]; 2] = [b"PackageReference", b"Reference"];

/// A project's declared dependency on a named package at a specific version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    pub name: String,
    pub version: Version,
}

/// A C# project and the package references it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub project_file: PathBuf,
    pub packages: Vec<PackageReference>,
}

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Failed to read project file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse project XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid attribute in project XML: {0}")]
    Attr(#[from] AttrError),
}

/// Discovers the projects under `<mod_root>/src`, in directory order, plus
/// the central package declarations at the mod root if present.
pub fn discover_projects(mod_root: &Path) -> Result<Vec<Project>, ProjectError> {
    let mut projects = resolve_projects(&mod_root.join("src"))?;

    let central = mod_root.join(CENTRAL_PACKAGES_FILE_NAME);
    if central.exists() {
        projects.push(parse_project(&central)?);
    }

    Ok(projects)
}

fn resolve_projects(root: &Path) -> Result<Vec<Project>, ProjectError> {
    let mut projects = Vec::new();

    if !root.is_dir() {
        return Ok(projects);
    }

    let mut children: Vec<PathBuf> = std::fs::read_dir(root)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    children.sort();

    for child in children {
        let mut inner: Vec<PathBuf> = std::fs::read_dir(&child)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        inner.sort();

        for inner_child in inner {
            let is_project = inner_child
                .extension()
                .is_some_and(|extension| extension == "csproj");

            if is_project {
                projects.push(parse_project(&inner_child)?);
                break;
            }
        }
    }

    Ok(projects)
}

/// Parses one project file into its declared package references
pub fn parse_project(project_file: &Path) -> Result<Project, ProjectError> {
    let content = std::fs::read_to_string(project_file)?;

    Ok(Project {
        project_file: project_file.to_path_buf(),
        packages: parse_references(&content)?,
    })
}

fn parse_references(content: &str) -> Result<Vec<PackageReference>, ProjectError> {
    let mut packages = Vec::new();
    let mut reader = Reader::from_str(content);
    let mut item_group_depth: usize = 0;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.name().as_ref() == b"ItemGroup" => {
                item_group_depth += 1;
            }
            Event::End(ref e) if e.name().as_ref() == b"ItemGroup" => {
                item_group_depth = item_group_depth.saturating_sub(1);
            }
            Event::Start(ref e) | Event::Empty(ref e)
                if item_group_depth > 0 && REFERENCE_TAGS.contains(&e.name().as_ref()) =>
            {
                let mut include: Option<String> = None;
                let mut version: Option<String> = None;

                for attr in e.attributes() {
                    let attr = attr?;
                    let value = String::from_utf8_lossy(&attr.value).to_string();
                    match attr.key.as_ref() {
                        b"Include" => include = Some(value),
                        b"Version" => version = Some(value),
                        _ => {}
                    }
                }

                if let Some(reference) = build_reference(include, version) {
                    packages.push(reference);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(packages)
}

// A reference the registry can never answer for is dropped with a warning
// rather than failing the whole scan.
fn build_reference(include: Option<String>, version: Option<String>) -> Option<PackageReference> {
    let Some(name) = include else {
        warn!("Skipping package reference without an Include attribute");
        return None;
    };

    let Some(raw) = version else {
        warn!("Skipping package reference '{}' without a Version attribute", name);
        return None;
    };

    match Version::parse(&raw) {
        Ok(version) => Some(PackageReference { name, version }),
        Err(e) => {
            warn!("Skipping package reference '{}': invalid version '{}': {}", name, raw, e);
            None
        }
    }
}
