//! Branch resolution

use super::host::GitHost;
use super::service::{RepoMutationService, branch_ref};
use ghcp_github::{GitHubError, Reference};
use tracing::{debug, info};

impl<H: GitHost> RepoMutationService<H> {
    /// Find the feature branch, or create it at the tip of the base branch
    ///
    /// # Arguments
    /// * `base_branch` - Short name of the existing branch to start from
    /// * `feature_branch` - Short name of the branch to find or create
    ///
    /// # Returns
    /// The feature branch reference. An existing feature branch is returned
    /// unchanged, wherever it points.
    ///
    /// # Errors
    /// - [`GitHubError::NotFound`] if the base branch does not exist, even
    ///   when the feature branch does
    /// - [`GitHubError::Conflict`] if the feature branch appears between the
    ///   lookup and the create
    pub async fn find_or_create_branch(
        &self,
        owner: &str,
        repo: &str,
        base_branch: &str,
        feature_branch: &str,
    ) -> Result<Reference, GitHubError> {
        let base = self.host.get_ref(owner, repo, &branch_ref(base_branch)).await?;
        debug!(branch = base_branch, sha = base.target(), "Resolved base branch");

        let feature_ref = branch_ref(feature_branch);
        match self.host.get_ref(owner, repo, &feature_ref).await {
            Ok(existing) => {
                info!(
                    branch = feature_branch,
                    sha = existing.target(),
                    "Reusing existing branch"
                );
                return Ok(existing);
            }
            Err(GitHubError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let created = self
            .host
            .create_ref(owner, repo, &feature_ref, base.target())
            .await?;
        info!(
            branch = feature_branch,
            from = base_branch,
            sha = created.target(),
            "Created branch"
        );
        Ok(created)
    }
}
