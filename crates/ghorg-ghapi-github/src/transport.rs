//! JSON transport.

use async_trait::async_trait;
use ghorg_config::Config;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{client::get_anonymous_client_builder, errors::GitHubError};

/// Fetches JSON documents from absolute URLs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// Issue a GET request and decode the body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, GitHubError>;
}

/// `reqwest` transport.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport from configuration.
    pub fn new(config: &Config) -> Result<Self, GitHubError> {
        Ok(Self {
            client: get_anonymous_client_builder(config).build()?,
        })
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    #[tracing::instrument(skip(self))]
    async fn get_json(&self, url: &str) -> Result<Value, GitHubError> {
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFoundError { url: url.into() });
        }

        Ok(response.error_for_status()?.json::<Value>().await?)
    }
}
