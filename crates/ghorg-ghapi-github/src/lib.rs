//! API crate.
//!
//! Contains functions to communicate with GitHub API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod errors;
mod github;
mod transport;

pub use errors::GitHubError;
pub use github::GithubApiService;
pub use transport::{JsonTransport, ReqwestTransport};
