//! GitHub client implementation
//!
//! Endpoint groups live in their own modules (`git_data.rs`, `pull_requests.rs`)
//! and extend [`GitHubClient`] with `impl` blocks.

use crate::error::GitHubError;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// GitHub API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("ghcp/", env!("CARGO_PKG_VERSION"));

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Settings for building a [`GitHubClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub token: Option<String>,
    pub api_base: String,
    pub user_agent: String,
    /// Per-request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// GitHub API client for making authenticated requests
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
    pub(crate) api_base: String,
    pub(crate) user_agent: String,
}

impl GitHubClient {
    /// Create a client against api.github.com with an optional token.
    ///
    /// Without a token every call fails with [`GitHubError::Auth`] before
    /// anything is sent.
    #[cfg(test)]
    pub(crate) fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.filter(|t| !t.is_empty()),
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Create a client from explicit options
    pub fn with_options(options: ClientOptions) -> Result<Self, GitHubError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GitHubError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: options.token.filter(|t| !t.is_empty()),
            api_base: options.api_base.trim_end_matches('/').to_string(),
            user_agent: options.user_agent,
        })
    }

    /// Check if the client has authentication configured
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Base URL requests are sent to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, GitHubError> {
        let token = self.token.as_deref().ok_or_else(|| {
            GitHubError::Auth(
                "GitHub token is required. Set GITHUB_TOKEN environment variable.".to_string(),
            )
        })?;

        debug!(method = method.as_str(), path, "GitHub API request");

        Ok(self
            .client
            .request(method, self.url(path))
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, ACCEPT_GITHUB_JSON))
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GitHubError> {
        let request = self.request(Method::GET, path)?.query(query);
        self.execute(request).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GitHubError> {
        let request = self.request(Method::POST, path)?.json(body);
        self.execute(request).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GitHubError> {
        let request = self.request(Method::PATCH, path)?.json(body);
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GitHubError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "GitHub API response");

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GitHubError::from_response(status, &error_text));
        }

        Ok(response.json().await?)
    }
}
