use async_trait::async_trait;
use ghorg_ghapi_interface::types::GhRepository;
use ghorg_models::OrgName;
use shaku::{Component, HasComponent, Interface};

use crate::{use_cases::orgs::GetPublicReposUrlInterface, CoreContext, Result};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListRepositoriesInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, org_name: &OrgName)
        -> Result<Vec<GhRepository>>;
}

#[derive(Component)]
#[shaku(interface = ListRepositoriesInterface)]
pub(crate) struct ListRepositories;

#[async_trait]
impl ListRepositoriesInterface for ListRepositories {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        org_name: &OrgName,
    ) -> Result<Vec<GhRepository>> {
        let get_public_repos_url: &dyn GetPublicReposUrlInterface = ctx.core_module.resolve_ref();
        let repos_url = get_public_repos_url.run(ctx, org_name).await?;

        Ok(ctx.api_service.repos_list(&repos_url).await?)
    }
}
