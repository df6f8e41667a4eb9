use async_trait::async_trait;
use clap::Parser;
use ghorg_core::OrgClient;
use ghorg_models::OrgName;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List public repositories of an organization
#[derive(Parser)]
pub(crate) struct OrgReposCommand {
    /// Organization name (e.g. `google`)
    org_name: OrgName,
    /// Only keep repositories under this license key (e.g. `apache-2.0`)
    #[arg(long)]
    license: Option<String>,
}

#[async_trait]
impl Command for OrgReposCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let client = OrgClient::new(ctx.as_core_context(), self.org_name);
        let names = client.public_repos(self.license.as_deref()).await?;

        if names.is_empty() {
            writeln!(ctx.writer.write().await, "No repository found.")?;
        } else {
            for name in names {
                writeln!(ctx.writer.write().await, "- {}", name)?;
            }
        }

        Ok(())
    }
}
