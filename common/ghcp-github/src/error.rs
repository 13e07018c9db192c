//! Errors returned by GitHub API calls

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Error classes a GitHub API call can fail with.
///
/// Each variant carries the message GitHub returned (or the transport error
/// text) so the caller can surface it unchanged.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The ref, commit, repository or pull request does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The object already exists, or the ref diverged from what was read
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing, invalid or insufficiently scoped token
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Network failure, unexpected status or undecodable response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request or the surrounding operation ran past its deadline
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GitHubError {
    /// Classify a non-success response.
    ///
    /// GitHub answers 422 both for "Reference already exists" and for a
    /// duplicate pull request, so it is treated as a conflict alongside 409.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| body.trim().to_string());
        let message = format!(
            "{} {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            detail
        );

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Auth(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => Self::Conflict(message),
            _ => Self::Transport(message),
        }
    }

    /// Stable identifier for the error class
    pub fn code(&self) -> &'static str {
        match self {
            GitHubError::NotFound(_) => "NOT_FOUND",
            GitHubError::Conflict(_) => "CONFLICT",
            GitHubError::Auth(_) => "AUTH",
            GitHubError::Transport(_) => "TRANSPORT",
            GitHubError::Timeout(_) => "TIMEOUT",
        }
    }
}

impl From<reqwest::Error> for GitHubError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            GitHubError::Timeout(error.to_string())
        } else if error.is_decode() {
            GitHubError::Transport(format!("Failed to parse GitHub API response: {error}"))
        } else {
            GitHubError::Transport(error.to_string())
        }
    }
}
