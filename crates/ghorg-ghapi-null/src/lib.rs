//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use ghorg_ghapi_interface::{
    types::{GhOrganization, GhRepository},
    ApiService, Result,
};

const NULL_ROOT_URL: &str = "null://api";

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn orgs_get(&self, org_name: &str) -> Result<GhOrganization> {
        Ok(GhOrganization {
            login: org_name.into(),
            repos_url: Some(format!("{NULL_ROOT_URL}/orgs/{org_name}/repos")),
            ..Default::default()
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn repos_list(&self, repos_url: &str) -> Result<Vec<GhRepository>> {
        Ok(vec![])
    }
}
