//! Pull request operations

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::types::{NewPullRequest, PullRequest, PullRequestUpdate};

impl GitHubClient {
    /// Create a pull request on GitHub
    ///
    /// # Errors
    /// Returns an error if:
    /// - No authentication token is configured
    /// - A pull request for the same head and base is already open
    /// - The API request fails or the response cannot be parsed
    pub async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_request: &NewPullRequest,
    ) -> Result<PullRequest, GitHubError> {
        let path = format!("/repos/{}/{}/pulls", owner, repo);
        self.post(&path, pull_request).await
    }

    /// List open pull requests from `head` into `base`
    ///
    /// # Arguments
    /// * `head` - Head in `owner:branch` form, as GitHub's filter expects
    /// * `base` - Base branch name
    pub async fn list_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        head: &str,
        base: &str,
    ) -> Result<Vec<PullRequest>, GitHubError> {
        let path = format!("/repos/{}/{}/pulls", owner, repo);
        self.get(&path, &[("state", "open"), ("head", head), ("base", base)])
            .await
    }

    /// Update title and body of an existing pull request
    pub async fn update_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<PullRequest, GitHubError> {
        let path = format!("/repos/{}/{}/pulls/{}", owner, repo, number);
        self.patch(&path, update).await
    }
}
