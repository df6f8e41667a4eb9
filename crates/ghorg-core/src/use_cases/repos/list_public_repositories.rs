use async_trait::async_trait;
use ghorg_models::OrgName;
use shaku::{Component, HasComponent, Interface};

use super::ListRepositoriesInterface;
use crate::{licenses::has_license, CoreContext, Result};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListPublicRepositoriesInterface: Interface {
    /// List repository names, optionally keeping only those under `license_key`.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        org_name: &OrgName,
        license_key: Option<String>,
    ) -> Result<Vec<String>>;
}

#[derive(Component)]
#[shaku(interface = ListPublicRepositoriesInterface)]
pub(crate) struct ListPublicRepositories;

#[async_trait]
impl ListPublicRepositoriesInterface for ListPublicRepositories {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        org_name: &OrgName,
        license_key: Option<String>,
    ) -> Result<Vec<String>> {
        let list_repositories: &dyn ListRepositoriesInterface = ctx.core_module.resolve_ref();
        let repositories = list_repositories.run(ctx, org_name).await?;

        Ok(repositories
            .into_iter()
            .filter(|repo| match &license_key {
                Some(key) => has_license(repo, key),
                None => true,
            })
            .map(|repo| repo.name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use ghorg_ghapi_interface::{
        types::{GhLicense, GhRepository},
        MockApiService,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{
            orgs::{GetPublicReposUrlInterface, MockGetPublicReposUrlInterface},
            repos::MockListRepositoriesInterface,
        },
        CoreModule,
    };

    fn licensed_payload() -> Vec<GhRepository> {
        vec![
            GhRepository::new("episodes.dart"),
            GhRepository::new("cpp-netlib").with_license(GhLicense::new("bsl-1.0")),
            GhRepository::new("dagger").with_license(GhLicense::new("apache-2.0")),
            GhRepository::new("ios-webkit-debug-proxy").with_license(GhLicense::new("other")),
            GhRepository::new("google.github.io"),
            GhRepository::new("kratu").with_license(GhLicense::new("apache-2.0")),
            GhRepository::new("build-debian-cloud").with_license(GhLicense::new("Apache-2.0")),
        ]
    }

    async fn run_with_payload(
        payload: Vec<GhRepository>,
        license_key: Option<&str>,
    ) -> Vec<String> {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = {
            let mut mock = MockListRepositoriesInterface::new();
            mock.expect_run().once().return_once(move |_, _| Ok(payload));

            CoreModule::builder()
                .with_component_override::<dyn ListRepositoriesInterface>(Box::new(mock))
                .build()
        };

        ListPublicRepositories
            .run(
                &ctx.as_context(),
                &OrgName::new("google").unwrap(),
                license_key.map(str::to_owned),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = {
            let mut mock = MockGetPublicReposUrlInterface::new();
            mock.expect_run().once().return_once(|_, _| Ok("world".into()));

            CoreModule::builder()
                .with_component_override::<dyn GetPublicReposUrlInterface>(Box::new(mock))
                .build()
        };
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_repos_list()
                .once()
                .withf(|repos_url| repos_url == "world")
                .return_once(|_| Ok(vec![GhRepository::new("Google"), GhRepository::new("TT")]));

            svc
        };

        let names = ListPublicRepositories
            .run(&ctx.as_context(), &OrgName::new("test").unwrap(), None)
            .await
            .unwrap();

        assert_eq!(names, vec!["Google", "TT"]);
    }

    #[tokio::test]
    async fn run_without_filter_keeps_order() {
        assert_eq!(
            run_with_payload(licensed_payload(), None).await,
            vec![
                "episodes.dart",
                "cpp-netlib",
                "dagger",
                "ios-webkit-debug-proxy",
                "google.github.io",
                "kratu",
                "build-debian-cloud",
            ]
        );
    }

    #[tokio::test]
    async fn run_with_unknown_license() {
        assert!(run_with_payload(licensed_payload(), Some("NONEXISTENT"))
            .await
            .is_empty());
        assert!(run_with_payload(vec![], Some("NONEXISTENT")).await.is_empty());
    }

    #[tokio::test]
    async fn run_with_apache_license() {
        assert_eq!(
            run_with_payload(licensed_payload(), Some("apache-2.0")).await,
            vec!["dagger", "kratu"]
        );
    }
}
