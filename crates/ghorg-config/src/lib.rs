//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};
use thiserror::Error;

/// Default GitHub API root URL.
pub const DEFAULT_GITHUB_ROOT_URL: &str = "https://api.github.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {source}")]
    DriverError { name: String, source: DriverError },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, ConfigError> {
        Self::from_lookup(version, |name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(version: String, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = EnvVars { lookup };
        let driver_value = vars.to_str("GHORG_API_DRIVER", "github");

        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&driver_value).map_err(|e| {
                    ConfigError::DriverError {
                        name: "GHORG_API_DRIVER".into(),
                        source: e,
                    }
                })?,
                github: ApiGitHubConfig {
                    connect_timeout: vars.to_u64("GHORG_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: vars.to_str("GHORG_API_GITHUB_ROOT_URL", DEFAULT_GITHUB_ROOT_URL),
                },
            },
            logging: LoggingConfig {
                use_bunyan: vars.to_bool("GHORG_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }

    /// Configuration with default values, ignoring the environment.
    pub fn default_no_version() -> Config {
        Config {
            api: ApiConfig {
                driver: ApiDriver::GitHub,
                github: ApiGitHubConfig {
                    connect_timeout: 5000,
                    root_url: DEFAULT_GITHUB_ROOT_URL.into(),
                },
            },
            logging: LoggingConfig { use_bunyan: false },
            version: "0.0.0".into(),
        }
    }
}

struct EnvVars<F> {
    lookup: F,
}

impl<F> EnvVars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn to_u64(&self, name: &str, default: u64) -> u64 {
        (self.lookup)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_bool(&self, name: &str, default: bool) -> bool {
        (self.lookup)(name).map(|e| !e.is_empty()).unwrap_or(default)
    }

    fn to_str(&self, name: &str, default: &str) -> String {
        (self.lookup)(name).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn from_map(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup("1.2.3".into(), move |name| map.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = from_map(&[]).unwrap();

        assert_eq!(config.api.driver, ApiDriver::GitHub);
        assert_eq!(config.api.github.root_url, "https://api.github.com");
        assert_eq!(config.api.github.connect_timeout, 5000);
        assert!(!config.logging.use_bunyan);
        assert_eq!(config.version, "1.2.3");
    }

    #[test]
    fn default_no_version_matches_empty_environment() {
        let from_empty = Config::from_lookup("0.0.0".into(), |_| None).unwrap();
        let defaults = Config::default_no_version();

        assert_eq!(defaults.api.driver, from_empty.api.driver);
        assert_eq!(defaults.api.github.root_url, from_empty.api.github.root_url);
        assert_eq!(
            defaults.api.github.connect_timeout,
            from_empty.api.github.connect_timeout
        );
        assert_eq!(defaults.logging.use_bunyan, from_empty.logging.use_bunyan);
        assert_eq!(defaults.version, from_empty.version);
    }

    #[test]
    fn overrides() {
        let config = from_map(&[
            ("GHORG_API_DRIVER", "null"),
            ("GHORG_API_GITHUB_ROOT_URL", "http://localhost:1234"),
            ("GHORG_API_GITHUB_CONNECT_TIMEOUT", "250"),
            ("GHORG_LOGGING_USE_BUNYAN", "1"),
        ])
        .unwrap();

        assert_eq!(config.api.driver, ApiDriver::Null);
        assert_eq!(config.api.github.root_url, "http://localhost:1234");
        assert_eq!(config.api.github.connect_timeout, 250);
        assert!(config.logging.use_bunyan);
    }

    #[test]
    fn unparsable_number_falls_back_to_default() {
        let config = from_map(&[("GHORG_API_GITHUB_CONNECT_TIMEOUT", "soon")]).unwrap();
        assert_eq!(config.api.github.connect_timeout, 5000);
    }

    #[test]
    fn invalid_driver() {
        let err = from_map(&[("GHORG_API_DRIVER", "gitlab")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for GHORG_API_DRIVER: Invalid driver kind: gitlab"
        );
    }
}
