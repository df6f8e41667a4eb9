use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::GhLicense;

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// Name.
    pub name: String,
    /// License, when GitHub detected one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<GhLicense>,
    /// Other fields, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GhRepository {
    /// Creates a repository from its name.
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the repository license.
    pub fn with_license(mut self, license: GhLicense) -> Self {
        self.license = Some(license);
        self
    }

    /// Get the license key, if any.
    pub fn license_key(&self) -> Option<&str> {
        self.license.as_ref().and_then(|l| l.key.as_deref())
    }
}
