//! Build support for RimWorld mod projects.
//!
//! Tracks the NuGet package references declared by a mod's C# projects and
//! the mod dependencies declared in its manifest, and reports available
//! updates for both.
//!
//! # Architecture
//!
//! ```text
//! manifest.yaml ──▶ ┌─────────────┐     ┌─────────────┐
//!                   │   Linker    │────▶│UpdateResolve│
//! src/*/*.csproj ─▶ │  (facade)   │     │  (scan)     │
//!                   └─────────────┘     └──────┬──────┘
//!                                              │
//!                                       ┌──────▼──────┐     ┌─────────────┐
//!                                       │ NugetClient │────▶│   Catalog   │
//!                                       │  (query)    │     │  (resolve)  │
//!                                       └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: NuGet v3 registry client (catalog resolution + search)
//! - [`linker`]: update resolution over declared packages and dependencies
//! - [`project`]: C# project discovery and package-reference extraction
//! - [`manifest`]: mod manifest model and loader
//! - [`workshop`]: seam to locally installed workshop content
//! - [`config`]: shared constants

pub mod config;
pub mod linker;
pub mod manifest;
pub mod project;
pub mod registry;
pub mod workshop;
