//! Organization commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

mod has_license;
mod repos;
mod repos_url;
mod show;

use self::{
    has_license::OrgHasLicenseCommand, repos::OrgReposCommand, repos_url::OrgReposUrlCommand,
    show::OrgShowCommand,
};

/// Explore organizations
#[derive(Parser)]
pub(crate) struct OrgCommand {
    #[clap(subcommand)]
    inner: OrgSubCommand,
}

#[async_trait]
impl Command for OrgCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum OrgSubCommand {
    Show(OrgShowCommand),
    ReposUrl(OrgReposUrlCommand),
    Repos(OrgReposCommand),
    HasLicense(OrgHasLicenseCommand),
}

#[async_trait]
impl Command for OrgSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Show(sub) => sub.execute(ctx).await,
            Self::ReposUrl(sub) => sub.execute(ctx).await,
            Self::Repos(sub) => sub.execute(ctx).await,
            Self::HasLicense(sub) => sub.execute(ctx).await,
        }
    }
}
