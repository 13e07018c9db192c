//! Exit code utilities and mappings

use crate::commands::validators::CommandValidationError;
use crate::config::ValidationErrors;
use ghcp_github::GitHubError;

pub const SUCCESS: u8 = 0;
pub const GENERAL_ERROR: u8 = 1;
pub const USAGE_ERROR: u8 = 2;
pub const AUTH_ERROR: u8 = 3;
pub const NOT_FOUND: u8 = 4;
pub const CONFLICT: u8 = 5;
pub const TRANSPORT_ERROR: u8 = 6;
pub const TIMEOUT: u8 = 7;

/// Pick the process exit code for a failed run
///
/// Errors wrapped with context are classified by their underlying cause.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    if let Some(github_error) = error.downcast_ref::<GitHubError>() {
        return match github_error {
            GitHubError::Auth(_) => AUTH_ERROR,
            GitHubError::NotFound(_) => NOT_FOUND,
            GitHubError::Conflict(_) => CONFLICT,
            GitHubError::Transport(_) => TRANSPORT_ERROR,
            GitHubError::Timeout(_) => TIMEOUT,
        };
    }

    if error.downcast_ref::<CommandValidationError>().is_some()
        || error.downcast_ref::<ValidationErrors>().is_some()
    {
        return USAGE_ERROR;
    }

    GENERAL_ERROR
}

/// Get a human-readable description for an exit code
pub fn get_exit_code_description(exit_code: u8) -> &'static str {
    match exit_code {
        SUCCESS => "success",
        GENERAL_ERROR => "general error",
        USAGE_ERROR => "invalid arguments or configuration",
        AUTH_ERROR => "authentication failed",
        NOT_FOUND => "not found",
        CONFLICT => "conflict",
        TRANSPORT_ERROR => "transport error",
        TIMEOUT => "timed out",
        _ => "error",
    }
}
