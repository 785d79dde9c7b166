//! Error types for data loading and navigation.
//!
//! Normalization itself never fails; these cover the collaborators around
//! it: fetching JSON assets and resolving routes.

use thiserror::Error;

/// Errors that can occur when fetching a JSON asset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The asset does not exist at the given location.
    #[error("not found: {0}")]
    NotFound(String),

    /// Reading a local file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The server returned an error response.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The asset was fetched but is not valid JSON.
    #[error("invalid JSON in {location}: {message}")]
    Parse { location: String, message: String },
}

impl LoadError {
    /// Returns `true` if retrying the same request cannot help.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            LoadError::NotFound(_) | LoadError::Parse { .. }
        )
    }
}

/// Errors raised while navigating between pages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// No route is registered for the path.
    #[error("no route for path: {0}")]
    UnknownRoute(String),
}
