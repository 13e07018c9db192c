//! Configuration file loading

use super::validation::{self, ValidationErrors};
use crate::constants;
use crate::github::Author;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Defaults for the pull request a run opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestDefaults {
    pub title: String,
    pub body: String,
    pub draft: bool,
}

impl Default for PullRequestDefaults {
    fn default() -> Self {
        Self {
            title: constants::github::DEFAULT_PR_TITLE.to_string(),
            body: constants::github::DEFAULT_PR_BODY.to_string(),
            draft: false,
        }
    }
}

/// Everything a run needs besides owner, repository and branch
///
/// The token is never read from or written to a file; it comes from the
/// environment or the command line.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub token: Option<String>,
    pub api_base: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub base_branch: String,
    pub author: Author,
    pub commit_message: String,
    pub pull_request: PullRequestDefaults,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// Values are not validated here; later layers may still override them.
    /// [`ConfigBuilder::build`](super::ConfigBuilder::build) validates the merged result.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;

        Ok(config)
    }

    /// Load `path` if given, else the default config file if present, else defaults
    ///
    /// A missing file is only an error when it was named explicitly.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(constants::config::DEFAULT_CONFIG_FILE).exists() => {
                Self::load(constants::config::DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply `GITHUB_TOKEN` and `GHCP_API_URL` from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// Empty values are ignored.
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(token) = lookup(constants::github::TOKEN_ENV) {
            self.token = Some(token);
        }
        if let Some(api_base) = lookup(constants::github::API_URL_ENV) {
            self.api_base = api_base;
        }
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        validation::validate_config(self)
    }

    /// Deadline for one run
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Create a configuration with built-in defaults only
    pub fn new() -> Self {
        Self {
            token: None,
            api_base: constants::github::API_BASE.to_string(),
            user_agent: constants::github::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: constants::github::DEFAULT_TIMEOUT_SECS,
            base_branch: constants::git::DEFAULT_BASE_BRANCH.to_string(),
            author: Author::new(
                constants::config::DEFAULT_AUTHOR_NAME,
                constants::config::DEFAULT_AUTHOR_EMAIL,
            ),
            commit_message: constants::git::DEFAULT_COMMIT_MSG.to_string(),
            pull_request: PullRequestDefaults::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("base_branch", &self.base_branch)
            .field("author", &self.author)
            .field("commit_message", &self.commit_message)
            .field("pull_request", &self.pull_request)
            .finish()
    }
}
