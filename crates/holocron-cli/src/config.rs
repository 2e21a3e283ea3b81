//! Configuration management for the Holocron CLI
//!
//! Settings come from built-in defaults, an optional TOML file, and
//! `HOLOCRON_*` environment variables, in that order of precedence.

use crate::api::endpoints;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default API root. Every identity and reference URL starts with it.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

/// Collections fetched in the reference deployment.
pub const DEFAULT_COLLECTIONS: [&str; 6] =
    ["people", "species", "planets", "vehicles", "films", "starships"];

/// Value sent in the `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = "my1-app";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Collection that gets resolved and grouped.
pub const DEFAULT_TARGET_COLLECTION: &str = "people";

/// Field the target collection is grouped by.
pub const DEFAULT_GROUP_BY: &str = "species";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API base URL, always with a trailing slash
    pub base_url: String,

    /// Identifying `User-Agent` header value
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Collection to resolve and group
    pub target_collection: String,

    /// Field to group the target collection by
    pub group_by: String,

    /// Collection names to fetch; each maps to `{base_url}{name}/`
    pub collections: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            target_collection: DEFAULT_TARGET_COLLECTION.to_string(),
            group_by: DEFAULT_GROUP_BY.to_string(),
            collections: DEFAULT_COLLECTIONS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load config from an optional TOML file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    CliError::config(format!("Cannot read '{}': {}", path.display(), e))
                })?;
                let mut config = toml::from_str::<Self>(&content)?;
                let base_url = config.base_url.clone();
                config.set_base_url(base_url);
                config
            },
            None => Self::default(),
        };

        config.merge_env()
    }

    /// Override fields with whatever `HOLOCRON_*` variables are set
    pub fn merge_env(mut self) -> Result<Self> {
        if let Ok(url) = std::env::var("HOLOCRON_BASE_URL") {
            self.set_base_url(url);
        }

        if let Ok(agent) = std::env::var("HOLOCRON_USER_AGENT") {
            self.user_agent = agent;
        }

        if let Ok(timeout) = std::env::var("HOLOCRON_TIMEOUT_SECS") {
            self.timeout_secs = timeout.parse().map_err(|_| {
                CliError::config(format!("HOLOCRON_TIMEOUT_SECS must be a number, got '{}'", timeout))
            })?;
        }

        if let Ok(target) = std::env::var("HOLOCRON_TARGET") {
            self.target_collection = target;
        }

        if let Ok(field) = std::env::var("HOLOCRON_GROUP_BY") {
            self.group_by = field;
        }

        if let Ok(list) = std::env::var("HOLOCRON_COLLECTIONS") {
            self.collections = list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(self)
    }

    /// Check the configuration before any request is made
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .map_err(|e| CliError::config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;

        if !self.base_url.ends_with('/') {
            return Err(CliError::config(format!(
                "Base URL '{}' must end with '/'",
                self.base_url
            )));
        }

        if self.collections.is_empty() {
            return Err(CliError::config("At least one collection must be configured"));
        }

        if !self.collections.contains(&self.target_collection) {
            return Err(CliError::config(format!(
                "Target collection '{}' is not among the configured collections ({})",
                self.target_collection,
                self.collections.join(", ")
            )));
        }

        if self.group_by.trim().is_empty() {
            return Err(CliError::config("Group-by field cannot be empty"));
        }

        Ok(())
    }

    /// Set the base URL, normalizing the trailing slash
    pub fn set_base_url(&mut self, url: impl AsRef<str>) {
        self.base_url = endpoints::normalize_base_url(url.as_ref());
    }

    /// `(name, start_url)` for every configured collection
    pub fn endpoints(&self) -> Vec<(String, String)> {
        self.collections
            .iter()
            .map(|name| {
                (
                    name.clone(),
                    endpoints::collection_url(&self.base_url, name),
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.collections.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoints() {
        let config = Config::default();
        let endpoints = config.endpoints();
        assert_eq!(
            endpoints[0],
            ("people".to_string(), "https://swapi.dev/api/people/".to_string())
        );
        assert_eq!(endpoints[5].1, "https://swapi.dev/api/starships/");
    }

    #[test]
    fn test_set_base_url_adds_trailing_slash() {
        let mut config = Config::default();
        config.set_base_url("http://127.0.0.1:8080/api");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api/");
    }

    #[test]
    fn test_validate_rejects_unknown_target() {
        let config = Config {
            target_collection: "droids".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("droids"));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = Config {
            base_url: "not a url/".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_trailing_slash() {
        let config = Config {
            base_url: "http://localhost:9000/api".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must end with '/'"));
    }

    #[test]
    #[serial]
    fn test_load_normalizes_base_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "http://localhost:9000/api""#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api/");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
base_url = "http://localhost:9000/api/"
collections = ["people", "species"]
group_by = "homeworld"
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api/");
        assert_eq!(config.collections, vec!["people", "species"]);
        assert_eq!(config.group_by, "homeworld");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);

        std::env::set_var("HOLOCRON_COLLECTIONS", "people, films ,");
        std::env::set_var("HOLOCRON_TIMEOUT_SECS", "5");
        let config = Config::load(Some(file.path())).unwrap();
        std::env::remove_var("HOLOCRON_COLLECTIONS");
        std::env::remove_var("HOLOCRON_TIMEOUT_SECS");

        assert_eq!(config.collections, vec!["people", "films"]);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/holocron.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
