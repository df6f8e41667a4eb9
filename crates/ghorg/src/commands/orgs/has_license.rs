use async_trait::async_trait;
use clap::Parser;
use ghorg_core::OrgClient;
use ghorg_models::OrgName;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Check whether a repository is published under a license
#[derive(Parser)]
pub(crate) struct OrgHasLicenseCommand {
    /// Organization name (e.g. `google`)
    org_name: OrgName,
    /// Repository name
    repo_name: String,
    /// License key (e.g. `apache-2.0`)
    license_key: String,
}

#[async_trait]
impl Command for OrgHasLicenseCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let client = OrgClient::new(ctx.as_core_context(), self.org_name);
        let repository = client.repository(&self.repo_name).await?;

        writeln!(
            ctx.writer.write().await,
            "{}",
            OrgClient::has_license(&repository, &self.license_key)
        )?;

        Ok(())
    }
}
