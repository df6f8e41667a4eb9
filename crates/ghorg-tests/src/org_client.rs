use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use ghorg_config::Config;
use ghorg_core::{CoreContext, CoreModule, DomainError, OrgClient};
use ghorg_ghapi_github::{GitHubError, GithubApiService, JsonTransport};
use ghorg_ghapi_interface::{types::GhRepository, ApiError};
use ghorg_models::OrgName;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::fixtures::{
    apache2_repos, expected_repos, org_payload, repos_payload, ORG_URL, REPOS_URL,
};

/// Serves canned payloads and records every requested URL.
#[derive(Clone, Default)]
struct RecordingTransport {
    responses: HashMap<String, Value>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingTransport {
    fn with_fixtures() -> Self {
        let mut transport = Self::default();
        transport.responses.insert(ORG_URL.into(), org_payload());
        transport.responses.insert(REPOS_URL.into(), repos_payload());
        transport
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonTransport for RecordingTransport {
    async fn get_json(&self, url: &str) -> Result<Value, GitHubError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| GitHubError::NotFoundError { url: url.into() })
    }
}

struct Arrange {
    config: Config,
    core_module: CoreModule,
    api_service: GithubApiService,
    transport: RecordingTransport,
}

impl Arrange {
    fn new(transport: RecordingTransport) -> Self {
        let config = Config::default_no_version();
        let api_service =
            GithubApiService::with_transport(config.clone(), Box::new(transport.clone()));

        Self {
            config,
            core_module: CoreModule::builder().build(),
            api_service,
            transport,
        }
    }

    fn client(&self, org_name: &str) -> OrgClient<'_> {
        OrgClient::new(
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
            },
            OrgName::new(org_name).unwrap(),
        )
    }
}

#[tokio::test]
async fn public_repos() {
    let arrange = Arrange::new(RecordingTransport::with_fixtures());
    let client = arrange.client("google");

    assert_eq!(
        serde_json::to_value(client.org().await.unwrap()).unwrap(),
        org_payload()
    );
    assert_eq!(client.public_repos(None).await.unwrap(), expected_repos());
    assert!(client
        .public_repos(Some("NONEXISTENT"))
        .await
        .unwrap()
        .is_empty());

    assert_eq!(
        arrange.transport.calls(),
        vec![ORG_URL, ORG_URL, REPOS_URL, ORG_URL, REPOS_URL]
    );
}

#[tokio::test]
async fn public_repos_with_license() {
    let arrange = Arrange::new(RecordingTransport::with_fixtures());
    let client = arrange.client("google");

    let expected: Vec<GhRepository> = serde_json::from_value(repos_payload()).unwrap();
    assert_eq!(client.repos_payload().await.unwrap(), expected);
    assert_eq!(
        client.public_repos(Some("apache-2.0")).await.unwrap(),
        apache2_repos()
    );
    assert_eq!(
        arrange.transport.calls(),
        vec![ORG_URL, REPOS_URL, ORG_URL, REPOS_URL]
    );
}

#[tokio::test]
async fn public_repos_url() {
    let arrange = Arrange::new(RecordingTransport::with_fixtures());

    assert_eq!(
        arrange.client("google").public_repos_url().await.unwrap(),
        REPOS_URL
    );
    assert_eq!(arrange.transport.calls(), vec![ORG_URL]);
}

#[tokio::test]
async fn unknown_organization() {
    let arrange = Arrange::new(RecordingTransport::default());

    let err = arrange.client("nobody").public_repos(None).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ApiError {
            source: ApiError::UnknownOrganization { ref org_name }
        } if org_name == "nobody"
    ));
    assert_eq!(
        arrange.transport.calls(),
        vec!["https://api.github.com/orgs/nobody"]
    );
}
