//! API types.

mod license;
mod organization;
mod repository;

pub use license::GhLicense;
pub use organization::GhOrganization;
pub use repository::GhRepository;
