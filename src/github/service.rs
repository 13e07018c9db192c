//! Repository mutation service
//!
//! [`RepoMutationService`] owns the remote host handle and the commit author.
//! Each pipeline step lives in its own module and extends the service with an
//! `impl` block:
//! - `branch.rs` - find or create the feature branch
//! - `commit.rs` - commit files onto it through the Git Data API
//! - `pull_requests.rs` - open or update the pull request
//!
//! Steps run strictly in order and every failure is returned unchanged. Remote
//! objects created before a failure are left in place.

use super::host::GitHost;
use super::types::{Author, PublishRequest};
use crate::config::Config;
use crate::constants::git::BRANCH_REF_PREFIX;
use ghcp_github::{ClientOptions, GitHubClient, GitHubError, PullRequest};
use std::time::Duration;
use tracing::{debug, info};

/// Sequences branch, commit and pull request calls against a [`GitHost`]
pub struct RepoMutationService<H> {
    pub(crate) host: H,
    pub(crate) author: Author,
}

impl<H: GitHost> RepoMutationService<H> {
    pub fn new(host: H, author: Author) -> Self {
        Self { host, author }
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Run the whole pipeline: resolve branch, commit files, publish pull request
    pub async fn publish(&self, request: &PublishRequest) -> Result<PullRequest, GitHubError> {
        let owner = request.owner.as_str();
        let repo = request.repo.as_str();

        let mut feature = self
            .find_or_create_branch(owner, repo, &request.base_branch, &request.feature_branch)
            .await?;

        let commit = self
            .create_or_update_commit(
                owner,
                repo,
                &mut feature,
                &request.files,
                &request.commit_message,
            )
            .await?;
        info!(sha = %commit.sha, branch = %request.feature_branch, "Committed files");

        self.create_or_update_pull_request(
            owner,
            repo,
            &request.base_branch,
            &request.feature_branch,
            &request.pull_request,
        )
        .await
    }

    /// [`publish`](Self::publish) bounded by `deadline`.
    ///
    /// On expiry the remaining steps are dropped; completed remote mutations stay.
    pub async fn publish_within(
        &self,
        request: &PublishRequest,
        deadline: Duration,
    ) -> Result<PullRequest, GitHubError> {
        match tokio::time::timeout(deadline, self.publish(request)).await {
            Ok(result) => result,
            Err(_) => Err(GitHubError::Timeout(format!(
                "publishing to {}/{} did not finish within {}s",
                request.owner,
                request.repo,
                deadline.as_secs()
            ))),
        }
    }
}

impl RepoMutationService<GitHubClient> {
    /// Build a service talking to GitHub as described by `config`
    pub fn from_config(config: &Config) -> Result<Self, GitHubError> {
        let client = GitHubClient::with_options(ClientOptions {
            token: config.token.clone(),
            api_base: config.api_base.clone(),
            user_agent: config.user_agent.clone(),
            timeout: Some(config.timeout()),
        })?;
        debug!(
            api_base = client.api_base(),
            authenticated = client.is_authenticated(),
            "Configured GitHub client"
        );
        Ok(Self::new(client, config.author.clone()))
    }
}

/// Ref path of a short branch name, e.g. `feature/x` -> `heads/feature/x`
pub(crate) fn branch_ref(branch: &str) -> String {
    format!("{}{}", BRANCH_REF_PREFIX, branch)
}
