use async_trait::async_trait;
use clap::Parser;
use ghorg_core::OrgClient;
use ghorg_models::OrgName;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show the repository listing URL of an organization
#[derive(Parser)]
pub(crate) struct OrgReposUrlCommand {
    /// Organization name (e.g. `google`)
    org_name: OrgName,
}

#[async_trait]
impl Command for OrgReposUrlCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let client = OrgClient::new(ctx.as_core_context(), self.org_name);
        let repos_url = client.public_repos_url().await?;

        writeln!(ctx.writer.write().await, "{}", repos_url)?;

        Ok(())
    }
}
