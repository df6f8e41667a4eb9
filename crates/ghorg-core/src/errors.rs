//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`ghorg_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: ghorg_ghapi_interface::ApiError,
    },

    #[error("Organization '{org_name}' does not expose a repository listing URL")]
    MissingReposUrl { org_name: String },

    #[error("Unknown repository '{repo_name}' in organization '{org_name}'")]
    UnknownRepository { org_name: String, repo_name: String },
}

impl From<ghorg_ghapi_interface::ApiError> for DomainError {
    fn from(e: ghorg_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
