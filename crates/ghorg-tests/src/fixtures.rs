//! Payloads shaped like the GitHub API responses for the `google` organization.

use serde_json::{json, Value};

pub const ORG_URL: &str = "https://api.github.com/orgs/google";
pub const REPOS_URL: &str = "https://api.github.com/orgs/google/repos";

pub fn org_payload() -> Value {
    json!({
        "login": "google",
        "id": 1342004,
        "url": ORG_URL,
        "repos_url": REPOS_URL,
        "public_repos": 2657,
        "type": "Organization"
    })
}

pub fn repos_payload() -> Value {
    json!([
        {
            "id": 7697149,
            "name": "episodes.dart",
            "full_name": "google/episodes.dart",
            "private": false,
            "license": {
                "key": "bsd-3-clause",
                "name": "BSD 3-Clause \"New\" or \"Revised\" License",
                "spdx_id": "BSD-3-Clause"
            }
        },
        {
            "id": 7776515,
            "name": "cpp-netlib",
            "full_name": "google/cpp-netlib",
            "private": false,
            "license": {
                "key": "bsl-1.0",
                "name": "Boost Software License 1.0",
                "spdx_id": "BSL-1.0"
            }
        },
        {
            "id": 7968417,
            "name": "dagger",
            "full_name": "google/dagger",
            "private": false,
            "license": {
                "key": "apache-2.0",
                "name": "Apache License 2.0",
                "spdx_id": "Apache-2.0"
            }
        },
        {
            "id": 8165161,
            "name": "ios-webkit-debug-proxy",
            "full_name": "google/ios-webkit-debug-proxy",
            "private": false,
            "license": {
                "key": "other",
                "name": "Other",
                "spdx_id": "NOASSERTION"
            }
        },
        {
            "id": 8459994,
            "name": "google.github.io",
            "full_name": "google/google.github.io",
            "private": false,
            "license": null
        },
        {
            "id": 8566972,
            "name": "kratu",
            "full_name": "google/kratu",
            "private": false,
            "license": {
                "key": "apache-2.0",
                "name": "Apache License 2.0",
                "spdx_id": "Apache-2.0"
            }
        },
        {
            "id": 8858648,
            "name": "build-debian-cloud",
            "full_name": "google/build-debian-cloud",
            "private": false
        }
    ])
}

pub fn expected_repos() -> Vec<&'static str> {
    vec![
        "episodes.dart",
        "cpp-netlib",
        "dagger",
        "ios-webkit-debug-proxy",
        "google.github.io",
        "kratu",
        "build-debian-cloud",
    ]
}

pub fn apache2_repos() -> Vec<&'static str> {
    vec!["dagger", "kratu"]
}
