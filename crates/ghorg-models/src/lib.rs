//! Domain models.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod org_name;

pub use org_name::{OrgName, OrgNameError};
