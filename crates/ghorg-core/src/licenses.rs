//! License matching.

use ghorg_ghapi_interface::types::GhRepository;

/// Check whether a repository is published under a license.
///
/// The comparison is an exact, case-sensitive match on `license.key`.
/// Repositories without a license, or with a license lacking a key, never match.
pub fn has_license(repository: &GhRepository, license_key: &str) -> bool {
    repository
        .license_key()
        .map(|key| key == license_key)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use ghorg_ghapi_interface::types::GhLicense;
    use serde_json::json;

    use super::*;

    fn repo_with_license(key: &str) -> GhRepository {
        GhRepository::new("repo").with_license(GhLicense::new(key))
    }

    #[test]
    fn matching_key() {
        assert!(has_license(&repo_with_license("my_license"), "my_license"));
    }

    #[test]
    fn other_key() {
        assert!(!has_license(&repo_with_license("other_license"), "my_license"));
    }

    #[test]
    fn case_sensitive() {
        assert!(!has_license(&repo_with_license("apache-2.0"), "Apache-2.0"));
    }

    #[test]
    fn missing_license() {
        assert!(!has_license(&GhRepository::new("repo"), "my_license"));
        assert!(!has_license(&GhRepository::new("repo"), ""));
    }

    #[test]
    fn license_without_key() {
        for license in [json!({"key": null}), json!({})] {
            let repo: GhRepository =
                serde_json::from_value(json!({"name": "repo", "license": license})).unwrap();

            assert!(!has_license(&repo, "my_license"));
            assert!(!has_license(&repo, ""));
        }
    }
}
