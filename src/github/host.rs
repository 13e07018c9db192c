//! Remote Git host seam
//!
//! [`GitHost`] is the set of remote calls the mutation service sequences.
//! [`GitHubClient`] is the production implementation; tests substitute
//! in-memory hosts or mocks.

use async_trait::async_trait;
use ghcp_github::{
    Blob, Commit, GitHubClient, GitHubError, NewBlob, NewCommit, NewPullRequest, PullRequest,
    PullRequestUpdate, Reference, Tree, TreeEntry,
};
#[cfg(test)]
use mockall::automock;

/// Operations on a remote Git hosting API
///
/// Ref paths are relative to `refs/`, e.g. `heads/master`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GitHost: Send + Sync {
    async fn get_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_path: &str,
    ) -> Result<Reference, GitHubError>;

    async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_path: &str,
        sha: &str,
    ) -> Result<Reference, GitHubError>;

    /// Non-force update: rejected unless it fast-forwards the ref
    async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_path: &str,
        sha: &str,
    ) -> Result<Reference, GitHubError>;

    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit, GitHubError>;

    async fn create_blob(
        &self,
        owner: &str,
        repo: &str,
        blob: &NewBlob,
    ) -> Result<Blob, GitHubError>;

    async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<Tree, GitHubError>;

    async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &NewCommit,
    ) -> Result<Commit, GitHubError>;

    /// Open pull requests from `head_branch` (in `owner`'s repository) into `base_branch`
    async fn find_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        head_branch: &str,
        base_branch: &str,
    ) -> Result<Vec<PullRequest>, GitHubError>;

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_request: &NewPullRequest,
    ) -> Result<PullRequest, GitHubError>;

    async fn update_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<PullRequest, GitHubError>;
}

#[async_trait]
impl GitHost for GitHubClient {
    async fn get_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_path: &str,
    ) -> Result<Reference, GitHubError> {
        GitHubClient::get_ref(self, owner, repo, ref_path).await
    }

    async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_path: &str,
        sha: &str,
    ) -> Result<Reference, GitHubError> {
        GitHubClient::create_ref(self, owner, repo, ref_path, sha).await
    }

    async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_path: &str,
        sha: &str,
    ) -> Result<Reference, GitHubError> {
        GitHubClient::update_ref(self, owner, repo, ref_path, sha, false).await
    }

    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit, GitHubError> {
        GitHubClient::get_commit(self, owner, repo, sha).await
    }

    async fn create_blob(
        &self,
        owner: &str,
        repo: &str,
        blob: &NewBlob,
    ) -> Result<Blob, GitHubError> {
        GitHubClient::create_blob(self, owner, repo, blob).await
    }

    async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<Tree, GitHubError> {
        GitHubClient::create_tree(self, owner, repo, base_tree, entries).await
    }

    async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &NewCommit,
    ) -> Result<Commit, GitHubError> {
        GitHubClient::create_commit(self, owner, repo, commit).await
    }

    async fn find_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        head_branch: &str,
        base_branch: &str,
    ) -> Result<Vec<PullRequest>, GitHubError> {
        let head = format!("{}:{}", owner, head_branch);
        self.list_open_pull_requests(owner, repo, &head, base_branch)
            .await
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_request: &NewPullRequest,
    ) -> Result<PullRequest, GitHubError> {
        GitHubClient::create_pull_request(self, owner, repo, pull_request).await
    }

    async fn update_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<PullRequest, GitHubError> {
        GitHubClient::update_pull_request(self, owner, repo, number, update).await
    }
}
