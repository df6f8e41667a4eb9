pub(crate) mod list_public_repositories;
pub(crate) mod list_repositories;

pub use list_public_repositories::ListPublicRepositoriesInterface;
pub use list_repositories::ListRepositoriesInterface;

#[cfg(test)]
pub use self::list_repositories::MockListRepositoriesInterface;
