//! Configuration validation
//!
//! Collects every problem with a [`Config`] instead of stopping at the first.

use super::Config;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Author name is empty
    EmptyAuthorName,
    /// Author email is empty or has no `@`
    InvalidAuthorEmail(String),
    /// Base branch is empty
    EmptyBaseBranch,
    /// Commit message is empty
    EmptyCommitMessage,
    /// Pull request title is empty
    EmptyPullRequestTitle,
    /// API base is not an http(s) URL
    InvalidApiBase(String),
    /// Timeout is zero
    ZeroTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyAuthorName => write!(f, "Author name cannot be empty"),
            ValidationError::InvalidAuthorEmail(email) => {
                write!(f, "Author email is invalid: '{}'", email)
            }
            ValidationError::EmptyBaseBranch => write!(f, "Base branch cannot be empty"),
            ValidationError::EmptyCommitMessage => write!(f, "Commit message cannot be empty"),
            ValidationError::EmptyPullRequestTitle => {
                write!(f, "Pull request title cannot be empty")
            }
            ValidationError::InvalidApiBase(url) => {
                write!(f, "API base must be an http(s) URL: '{}'", url)
            }
            ValidationError::ZeroTimeout => write!(f, "Timeout must be at least one second"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// All validation errors found in one configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "Validation errors: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if config.author.name.trim().is_empty() {
        errors.push(ValidationError::EmptyAuthorName);
    }
    if !is_valid_email(&config.author.email) {
        errors.push(ValidationError::InvalidAuthorEmail(
            config.author.email.clone(),
        ));
    }
    if config.base_branch.trim().is_empty() {
        errors.push(ValidationError::EmptyBaseBranch);
    }
    if config.commit_message.trim().is_empty() {
        errors.push(ValidationError::EmptyCommitMessage);
    }
    if config.pull_request.title.trim().is_empty() {
        errors.push(ValidationError::EmptyPullRequestTitle);
    }
    if !(config.api_base.starts_with("https://") || config.api_base.starts_with("http://")) {
        errors.push(ValidationError::InvalidApiBase(config.api_base.clone()));
    }
    if config.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.trim().is_empty() && !domain.trim().is_empty(),
        None => false,
    }
}
