use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GitHub License, as embedded in a repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhLicense {
    /// License key (e.g. `apache-2.0`), `None` when absent or null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Other fields, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GhLicense {
    /// Creates a license from its key.
    pub fn new<T: Into<String>>(key: T) -> Self {
        Self {
            key: Some(key.into()),
            ..Default::default()
        }
    }
}
