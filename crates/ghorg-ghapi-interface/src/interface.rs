use async_trait::async_trait;

use crate::{
    types::{GhOrganization, GhRepository},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get organization metadata from its name.
    async fn orgs_get(&self, org_name: &str) -> Result<GhOrganization>;
    /// List repositories from a repository listing URL.
    async fn repos_list(&self, repos_url: &str) -> Result<Vec<GhRepository>>;
}
