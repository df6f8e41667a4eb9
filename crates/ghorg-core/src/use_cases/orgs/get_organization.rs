use async_trait::async_trait;
use ghorg_ghapi_interface::types::GhOrganization;
use ghorg_models::OrgName;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetOrganizationInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, org_name: &OrgName) -> Result<GhOrganization>;
}

#[derive(Component)]
#[shaku(interface = GetOrganizationInterface)]
pub(crate) struct GetOrganization;

#[async_trait]
impl GetOrganizationInterface for GetOrganization {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, org_name: &OrgName) -> Result<GhOrganization> {
        Ok(ctx.api_service.orgs_get(org_name.as_str()).await?)
    }
}
