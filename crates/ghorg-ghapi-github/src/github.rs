//! GitHub adapter

use async_trait::async_trait;
use ghorg_config::Config;
use ghorg_ghapi_interface::{
    types::{GhOrganization, GhRepository},
    ApiError, ApiService, Result,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    client::build_github_url,
    errors::GitHubError,
    transport::{JsonTransport, ReqwestTransport},
};

/// GitHub API adapter implementation.
pub struct GithubApiService {
    config: Config,
    transport: Box<dyn JsonTransport>,
}

impl GithubApiService {
    /// Creates new GitHub API adapter, using a `reqwest` transport.
    pub fn new(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Creates new GitHub API adapter on top of a custom transport.
    pub fn with_transport(config: Config, transport: Box<dyn JsonTransport>) -> Self {
        Self { config, transport }
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        let value = self.transport.get_json(url).await?;
        serde_json::from_value(value).map_err(|e| GitHubError::DecodeError {
            url: url.into(),
            source: e,
        })
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn orgs_get(&self, org_name: &str) -> Result<GhOrganization> {
        let url = self.build_url(format!("/orgs/{org_name}"));

        self.get::<GhOrganization>(&url)
            .await
            .map_err(|e| match e {
                GitHubError::NotFoundError { .. } => ApiError::UnknownOrganization {
                    org_name: org_name.into(),
                },
                e => e.into(),
            })
    }

    #[tracing::instrument(skip(self))]
    async fn repos_list(&self, repos_url: &str) -> Result<Vec<GhRepository>> {
        let repositories: Vec<GhRepository> = self.get(repos_url).await?;
        debug!(count = repositories.len(), "Repositories fetched");

        Ok(repositories)
    }
}
