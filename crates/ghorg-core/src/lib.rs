//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod client;
mod context;
pub mod errors;
pub mod licenses;
pub mod use_cases;

pub use client::OrgClient;
pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    orgs::{get_organization::GetOrganization, get_public_repos_url::GetPublicReposUrl},
    repos::{
        list_public_repositories::ListPublicRepositories, list_repositories::ListRepositories,
    },
};

module! {
    pub CoreModule {
        components = [
            GetOrganization, GetPublicReposUrl, ListRepositories, ListPublicRepositories
        ],
        providers = []
    }
}
