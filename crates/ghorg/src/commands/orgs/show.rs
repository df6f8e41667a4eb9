use async_trait::async_trait;
use clap::Parser;
use ghorg_core::OrgClient;
use ghorg_models::OrgName;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show organization metadata
#[derive(Parser)]
pub(crate) struct OrgShowCommand {
    /// Organization name (e.g. `google`)
    org_name: OrgName,
}

#[async_trait]
impl Command for OrgShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let client = OrgClient::new(ctx.as_core_context(), self.org_name);
        let organization = client.org().await?;

        writeln!(
            ctx.writer.write().await,
            "{}",
            serde_json::to_string_pretty(&organization)?
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ghorg_ghapi_interface::types::GhOrganization;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_orgs_get()
            .once()
            .withf(|org_name| org_name == "google")
            .return_once(|_| {
                Ok(GhOrganization {
                    login: "google".into(),
                    repos_url: Some("https://api.github.com/orgs/google/repos".into()),
                    ..Default::default()
                })
            });

        assert_eq!(
            test_command(ctx, &["orgs", "show", "google"]).await,
            concat!(
                "{\n",
                "  \"login\": \"google\",\n",
                "  \"repos_url\": \"https://api.github.com/orgs/google/repos\"\n",
                "}\n"
            )
        );
    }
}
