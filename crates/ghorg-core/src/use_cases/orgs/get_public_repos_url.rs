use async_trait::async_trait;
use ghorg_models::OrgName;
use shaku::{Component, HasComponent, Interface};

use super::GetOrganizationInterface;
use crate::{CoreContext, DomainError, Result};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetPublicReposUrlInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, org_name: &OrgName) -> Result<String>;
}

#[derive(Component)]
#[shaku(interface = GetPublicReposUrlInterface)]
pub(crate) struct GetPublicReposUrl;

#[async_trait]
impl GetPublicReposUrlInterface for GetPublicReposUrl {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, org_name: &OrgName) -> Result<String> {
        let get_organization: &dyn GetOrganizationInterface = ctx.core_module.resolve_ref();
        let organization = get_organization.run(ctx, org_name).await?;

        organization
            .repos_url
            .ok_or_else(|| DomainError::MissingReposUrl {
                org_name: org_name.to_string(),
            })
    }
}
