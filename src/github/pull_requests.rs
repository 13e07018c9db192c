//! Pull request publishing

use super::host::GitHost;
use super::service::RepoMutationService;
use super::types::PullRequestContent;
use ghcp_github::{GitHubError, NewPullRequest, PullRequest, PullRequestUpdate};
use tracing::info;

impl<H: GitHost> RepoMutationService<H> {
    /// Open a pull request from `feature_branch` into `base_branch`, or update
    /// the one already open for that pair
    ///
    /// An existing pull request gets the new title and body; its draft state is
    /// left as is.
    ///
    /// # Returns
    /// The created or updated pull request
    pub async fn create_or_update_pull_request(
        &self,
        owner: &str,
        repo: &str,
        base_branch: &str,
        feature_branch: &str,
        content: &PullRequestContent,
    ) -> Result<PullRequest, GitHubError> {
        let open = self
            .host
            .find_open_pull_requests(owner, repo, feature_branch, base_branch)
            .await?;

        if let Some(existing) = open.into_iter().next() {
            let updated = self
                .host
                .update_pull_request(
                    owner,
                    repo,
                    existing.number,
                    &PullRequestUpdate {
                        title: content.title.clone(),
                        body: content.body.clone(),
                    },
                )
                .await?;
            info!(number = updated.number, url = %updated.html_url, "Updated pull request");
            return Ok(updated);
        }

        let created = self
            .host
            .create_pull_request(
                owner,
                repo,
                &NewPullRequest {
                    title: content.title.clone(),
                    head: feature_branch.to_string(),
                    base: base_branch.to_string(),
                    body: content.body.clone(),
                    draft: content.draft,
                },
            )
            .await?;
        info!(number = created.number, url = %created.html_url, "Created pull request");
        Ok(created)
    }
}
