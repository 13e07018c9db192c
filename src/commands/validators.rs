//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. Everything here runs before any network call.

use anyhow::Result;
use regex::Regex;

/// Longest GitHub user or organization name
const MAX_OWNER_LEN: usize = 39;

/// Longest GitHub repository name
const MAX_REPO_LEN: usize = 100;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// Feature and base branch are the same
    SameBranch { branch: String },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
            CommandValidationError::SameBranch { branch } => {
                write!(
                    f,
                    "Feature branch and base branch are both '{}'; they must differ",
                    branch
                )
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error, keeping it downcastable
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow::Error::new(error)
}

fn invalid(argument: &str, value: &str, reason: &str) -> anyhow::Error {
    validation_error_to_anyhow(CommandValidationError::InvalidValue {
        argument: argument.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

/// Validate a repository owner (user or organization)
///
/// Alphanumerics and hyphens, not starting with a hyphen, at most 39 characters.
pub fn validate_owner(owner: &str) -> Result<()> {
    if owner.len() > MAX_OWNER_LEN {
        return Err(invalid("owner", owner, "owner name is too long"));
    }
    if !Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]*$")?.is_match(owner) {
        return Err(invalid(
            "owner",
            owner,
            "only letters, digits and hyphens are allowed, and it cannot start with a hyphen",
        ));
    }
    Ok(())
}

/// Validate a repository name
pub fn validate_repository_name(repo: &str) -> Result<()> {
    if repo.len() > MAX_REPO_LEN {
        return Err(invalid("repository", repo, "repository name is too long"));
    }
    if repo == "." || repo == ".." {
        return Err(invalid("repository", repo, "reserved repository name"));
    }
    if !Regex::new(r"^[A-Za-z0-9._-]+$")?.is_match(repo) {
        return Err(invalid(
            "repository",
            repo,
            "only letters, digits, '.', '-' and '_' are allowed",
        ));
    }
    Ok(())
}

/// Validate a branch name against git's ref naming rules
pub fn validate_branch_name(argument: &str, branch: &str) -> Result<()> {
    if branch.trim().is_empty() {
        return Err(invalid(
            argument,
            branch,
            "branch name cannot be empty or whitespace only",
        ));
    }

    if Regex::new(r"[\x00-\x20\x7f~^:?*\[\\]")?.is_match(branch) {
        return Err(invalid(
            argument,
            branch,
            "branch name cannot contain spaces, control characters or any of ~^:?*[\\",
        ));
    }

    let malformed = branch.starts_with('-')
        || branch.starts_with('/')
        || branch.ends_with('/')
        || branch.ends_with('.')
        || branch.ends_with(".lock")
        || branch.contains("..")
        || branch.contains("//")
        || branch.contains("@{")
        || branch == "@"
        || branch.split('/').any(|part| part.starts_with('.'));
    if malformed {
        return Err(invalid(argument, branch, "invalid Git branch name format"));
    }

    Ok(())
}

/// Ensure the feature branch is not the base branch
pub fn validate_distinct_branches(feature_branch: &str, base_branch: &str) -> Result<()> {
    if feature_branch == base_branch {
        return Err(validation_error_to_anyhow(
            CommandValidationError::SameBranch {
                branch: feature_branch.to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate a repository path given with `LOCAL:REMOTE`
pub fn validate_repository_path(path: &str) -> Result<()> {
    crate::utils::to_repository_path(std::path::Path::new(path))
        .map(|_| ())
        .map_err(|e| invalid("file", path, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_owner_valid() {
        for owner in ["acme", "octo-cat", "A1", "x"] {
            assert!(validate_owner(owner).is_ok(), "{owner}");
        }
    }

    #[test]
    fn test_validate_owner_invalid() {
        for owner in ["", "-acme", "acme corp", "acme/widgets", "a_b"] {
            assert!(validate_owner(owner).is_err(), "{owner}");
        }
        assert!(validate_owner(&"a".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_repository_name() {
        for repo in ["widgets", "my.repo", "my_repo-2", ".github"] {
            assert!(validate_repository_name(repo).is_ok(), "{repo}");
        }
        for repo in ["", ".", "..", "wid gets", "a/b"] {
            assert!(validate_repository_name(repo).is_err(), "{repo}");
        }
    }

    #[test]
    fn test_validate_branch_name_valid() {
        for branch in ["feature/x", "fix-123", "release/v1.2", "user/a.b"] {
            assert!(validate_branch_name("branch", branch).is_ok(), "{branch}");
        }
    }

    #[test]
    fn test_validate_branch_name_invalid_format() {
        for branch in [
            "-invalid",
            "invalid.",
            "feature..invalid",
            "feature/",
            "topic.lock",
            "a//b",
            "a@{b",
            "@",
            "feature/.hidden",
        ] {
            let result = validate_branch_name("branch", branch);
            assert!(result.is_err(), "{branch}");
            assert!(
                result
                    .unwrap_err()
                    .to_string()
                    .contains("invalid Git branch name"),
                "{branch}"
            );
        }
    }

    #[test]
    fn test_validate_branch_name_forbidden_characters() {
        for branch in ["with space", "tab\tname", "a~1", "a^", "a:b", "a?", "a*", "a[b", "a\\b"] {
            let result = validate_branch_name("branch", branch);
            assert!(result.is_err(), "{branch}");
            assert!(result.unwrap_err().to_string().contains("cannot contain"));
        }
    }

    #[test]
    fn test_validate_branch_name_empty() {
        let result = validate_branch_name("base", "  ");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid value '  ' for base")
        );
    }

    #[test]
    fn test_validate_distinct_branches() {
        assert!(validate_distinct_branches("feature/x", "master").is_ok());

        let error = validate_distinct_branches("master", "master").unwrap_err();
        assert_eq!(
            error.downcast_ref::<CommandValidationError>(),
            Some(&CommandValidationError::SameBranch {
                branch: "master".to_string()
            })
        );
    }

    #[test]
    fn test_validate_repository_path() {
        assert!(validate_repository_path("docs/readme.md").is_ok());
        assert!(validate_repository_path("../escape.txt").is_err());
        assert!(validate_repository_path("/abs.txt").is_err());
    }

    #[test]
    fn test_errors_are_downcastable() {
        let error = validate_owner("-bad").unwrap_err();
        assert!(error.downcast_ref::<CommandValidationError>().is_some());
    }

    #[test]
    fn test_command_validation_error_display() {
        let error = CommandValidationError::InvalidValue {
            argument: "branch".to_string(),
            value: "-invalid".to_string(),
            reason: "invalid format".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value '-invalid' for branch: invalid format"
        );

        let error = CommandValidationError::SameBranch {
            branch: "master".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Feature branch and base branch are both 'master'; they must differ"
        );
    }
}
