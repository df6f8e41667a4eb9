//! Organization name.

use std::str::FromStr;

use thiserror::Error;

/// Organization name error.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrgNameError {
    /// Invalid organization name.
    #[error("Invalid organization name: '{}'", name)]
    InvalidOrgName { name: String },
}

/// Organization name, as used in `/orgs/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrgName(String);

impl OrgName {
    /// Creates a new organization name.
    pub fn new(name: &str) -> Result<Self, OrgNameError> {
        if name.is_empty() || name.trim() != name || name.contains('/') {
            return Err(OrgNameError::InvalidOrgName {
                name: name.to_string(),
            });
        }

        Ok(Self(name.to_string()))
    }

    /// Get name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrgName {
    type Err = OrgNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl TryFrom<&str> for OrgName {
    type Error = OrgNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for OrgName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert_eq!(OrgName::new("google").unwrap().as_str(), "google");
        assert_eq!(OrgName::new("Google").unwrap().to_string(), "Google");
        assert_eq!("rust-lang".parse::<OrgName>().unwrap().as_str(), "rust-lang");
    }

    #[test]
    fn invalid_names() {
        for name in ["", " google", "google ", "google/abc"] {
            assert_eq!(
                OrgName::new(name),
                Err(OrgNameError::InvalidOrgName { name: name.into() })
            );
        }
    }
}
