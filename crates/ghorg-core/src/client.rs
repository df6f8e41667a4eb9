//! Organization client.

use ghorg_ghapi_interface::types::{GhOrganization, GhRepository};
use ghorg_models::OrgName;
use shaku::HasComponent;

use crate::{
    licenses,
    use_cases::{
        orgs::{GetOrganizationInterface, GetPublicReposUrlInterface},
        repos::{ListPublicRepositoriesInterface, ListRepositoriesInterface},
    },
    CoreContext, DomainError, Result,
};

/// Client bound to one organization.
///
/// Nothing is memoized: each call goes back to the API.
pub struct OrgClient<'a> {
    ctx: CoreContext<'a>,
    org_name: OrgName,
}

impl<'a> OrgClient<'a> {
    /// Creates a client for an organization.
    pub fn new(ctx: CoreContext<'a>, org_name: OrgName) -> Self {
        Self { ctx, org_name }
    }

    /// Get organization name.
    pub fn org_name(&self) -> &OrgName {
        &self.org_name
    }

    /// Fetch organization metadata.
    pub async fn org(&self) -> Result<GhOrganization> {
        let uc: &dyn GetOrganizationInterface = self.ctx.core_module.resolve_ref();
        uc.run(&self.ctx, &self.org_name).await
    }

    /// Get the repository listing URL from organization metadata.
    pub async fn public_repos_url(&self) -> Result<String> {
        let uc: &dyn GetPublicReposUrlInterface = self.ctx.core_module.resolve_ref();
        uc.run(&self.ctx, &self.org_name).await
    }

    /// Fetch all repositories, as returned by the API.
    pub async fn repos_payload(&self) -> Result<Vec<GhRepository>> {
        let uc: &dyn ListRepositoriesInterface = self.ctx.core_module.resolve_ref();
        uc.run(&self.ctx, &self.org_name).await
    }

    /// List repository names, optionally filtered on a license key.
    pub async fn public_repos(&self, license_key: Option<&str>) -> Result<Vec<String>> {
        let uc: &dyn ListPublicRepositoriesInterface = self.ctx.core_module.resolve_ref();
        uc.run(&self.ctx, &self.org_name, license_key.map(str::to_owned))
            .await
    }

    /// Fetch a single repository from the listing, by name.
    pub async fn repository(&self, repo_name: &str) -> Result<GhRepository> {
        self.repos_payload()
            .await?
            .into_iter()
            .find(|repo| repo.name == repo_name)
            .ok_or_else(|| DomainError::UnknownRepository {
                org_name: self.org_name.to_string(),
                repo_name: repo_name.into(),
            })
    }

    /// Check whether a repository is published under a license.
    pub fn has_license(repository: &GhRepository, license_key: &str) -> bool {
        licenses::has_license(repository, license_key)
    }
}
