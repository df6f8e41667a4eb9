pub mod orgs;
pub mod repos;
