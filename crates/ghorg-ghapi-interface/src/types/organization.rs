use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GitHub Organization.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(from = "RawOrganization")]
pub struct GhOrganization {
    /// Organization name.
    pub login: String,
    /// Repository listing URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repos_url: Option<String>,
    /// Other fields, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawOrganization {
    login: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawOrganization> for GhOrganization {
    fn from(raw: RawOrganization) -> Self {
        let RawOrganization { login, mut extra } = raw;

        // Only a string URL is lifted out; null or odd values stay in `extra`.
        let repos_url = match extra.remove("repos_url") {
            Some(Value::String(url)) => Some(url),
            Some(other) => {
                extra.insert("repos_url".into(), other);
                None
            }
            None => None,
        };

        Self {
            login,
            repos_url,
            extra,
        }
    }
}
