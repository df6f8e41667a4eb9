use ghorg_ghapi_interface::ApiError;

/// GitHub adapter error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Resource not found: {url}")]
    NotFoundError { url: String },

    #[error("Could not decode payload from {url}: {source}")]
    DecodeError {
        url: String,
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        ApiError::ImplementationError { source: e.into() }
    }
}
