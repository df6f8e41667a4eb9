pub(crate) mod get_organization;
pub(crate) mod get_public_repos_url;

pub use get_organization::GetOrganizationInterface;
pub use get_public_repos_url::GetPublicReposUrlInterface;

#[cfg(test)]
pub use self::{
    get_organization::MockGetOrganizationInterface,
    get_public_repos_url::MockGetPublicReposUrlInterface,
};
