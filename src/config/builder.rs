//! Configuration builder utilities

use super::Config;
use super::validation::ValidationErrors;
use crate::github::Author;

/// Builder layering command-line overrides onto a loaded [`Config`]
///
/// Every `with_*` method accepts either a value or an `Option`; `None` keeps
/// the current value.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from built-in defaults
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the access token
    pub fn with_token(mut self, token: impl Into<Option<String>>) -> Self {
        if let Some(token) = token.into().filter(|t| !t.trim().is_empty()) {
            self.config.token = Some(token);
        }
        self
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<Option<String>>) -> Self {
        if let Some(api_base) = api_base.into() {
            self.config.api_base = api_base;
        }
        self
    }

    /// Set the base branch
    pub fn with_base_branch(mut self, base_branch: impl Into<Option<String>>) -> Self {
        if let Some(base_branch) = base_branch.into() {
            self.config.base_branch = base_branch;
        }
        self
    }

    /// Set the commit message
    pub fn with_commit_message(mut self, message: impl Into<Option<String>>) -> Self {
        if let Some(message) = message.into() {
            self.config.commit_message = message;
        }
        self
    }

    /// Set the pull request title
    pub fn with_title(mut self, title: impl Into<Option<String>>) -> Self {
        if let Some(title) = title.into() {
            self.config.pull_request.title = title;
        }
        self
    }

    /// Set the pull request body
    pub fn with_body(mut self, body: impl Into<Option<String>>) -> Self {
        if let Some(body) = body.into() {
            self.config.pull_request.body = body;
        }
        self
    }

    /// Open new pull requests as drafts; `false` keeps the configured setting
    pub fn as_draft(mut self, draft: bool) -> Self {
        if draft {
            self.config.pull_request.draft = true;
        }
        self
    }

    /// Set author name and/or email
    pub fn with_author(
        mut self,
        name: impl Into<Option<String>>,
        email: impl Into<Option<String>>,
    ) -> Self {
        let Author {
            name: current_name,
            email: current_email,
        } = self.config.author;
        self.config.author = Author {
            name: name.into().unwrap_or(current_name),
            email: email.into().unwrap_or(current_email),
        };
        self
    }

    /// Set the deadline for a run, in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: impl Into<Option<u64>>) -> Self {
        if let Some(timeout_secs) = timeout_secs.into() {
            self.config.timeout_secs = timeout_secs;
        }
        self
    }

    /// Validate the merged configuration and build it
    pub fn build(self) -> Result<Config, ValidationErrors> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
