//! NuGet v3 registry client
//!
//! The registry describes itself through a root index document listing typed
//! resources. The client resolves the search resource once per instance and
//! queries it for package metadata.
//!
//! # Modules
//!
//! - [`catalog`]: lazy, concurrency-safe resolution of the search endpoint
//! - [`client`]: package search queries
//! - [`error`]: registry error taxonomy
//! - [`types`]: serde mirror of the registry's wire schema

pub mod catalog;
pub mod client;
pub mod error;
pub mod types;

pub use client::NugetClient;
pub use error::RegistryError;
