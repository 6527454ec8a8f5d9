use thiserror::Error;

/// Errors raised by the registry client.
///
/// Only [`RegistryError::PackageQuery`] is recoverable: the client catches it
/// and reports the lookup as absent. Every other variant is fatal for the
/// operation that produced it.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The root index fetch returned a non-success status. The catalog
    /// endpoint stays unresolved so a later call retries from scratch.
    #[error("Service index request failed with status {0}")]
    ServiceUnavailable(reqwest::StatusCode),

    /// A single package search returned a non-success status.
    #[error("Search query for '{package}' failed with status {status}")]
    PackageQuery {
        package: String,
        status: reqwest::StatusCode,
    },

    /// The registry's self-description or response body was malformed.
    #[error("Invalid registry response: {0}")]
    InvalidResponse(String),
}
