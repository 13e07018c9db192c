//! Git Data API operations: refs, commits, blobs and trees

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::types::{
    Blob, Commit, CreateRefPayload, CreateTreePayload, NewBlob, NewCommit, Reference, Tree,
    TreeEntry, UpdateRefPayload,
};

impl GitHubClient {
    /// Get a single reference
    ///
    /// # Arguments
    /// * `ref_path` - Reference without the `refs/` prefix, e.g. `heads/master`
    ///
    /// # Errors
    /// Returns [`GitHubError::NotFound`] if the reference does not exist
    pub async fn get_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_path: &str,
    ) -> Result<Reference, GitHubError> {
        let path = format!("/repos/{}/{}/git/ref/{}", owner, repo, ref_path);
        self.get(&path, &[]).await
    }

    /// Create a reference pointing at `sha`
    ///
    /// # Errors
    /// Returns [`GitHubError::Conflict`] if the reference already exists
    pub async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_path: &str,
        sha: &str,
    ) -> Result<Reference, GitHubError> {
        let path = format!("/repos/{}/{}/git/refs", owner, repo);
        let payload = CreateRefPayload {
            name: format!("refs/{}", ref_path),
            sha,
        };
        self.post(&path, &payload).await
    }

    /// Point an existing reference at `sha`
    ///
    /// With `force` unset GitHub only accepts fast-forward updates.
    pub async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_path: &str,
        sha: &str,
        force: bool,
    ) -> Result<Reference, GitHubError> {
        let path = format!("/repos/{}/{}/git/refs/{}", owner, repo, ref_path);
        self.patch(&path, &UpdateRefPayload { sha, force }).await
    }

    pub async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<Commit, GitHubError> {
        let path = format!("/repos/{}/{}/git/commits/{}", owner, repo, sha);
        self.get(&path, &[]).await
    }

    pub async fn create_blob(
        &self,
        owner: &str,
        repo: &str,
        blob: &NewBlob,
    ) -> Result<Blob, GitHubError> {
        let path = format!("/repos/{}/{}/git/blobs", owner, repo);
        self.post(&path, blob).await
    }

    /// Create a tree on top of `base_tree`
    ///
    /// Entries replace paths already present in the base tree and add the
    /// rest; everything else in the base tree is kept.
    pub async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<Tree, GitHubError> {
        let path = format!("/repos/{}/{}/git/trees", owner, repo);
        let payload = CreateTreePayload {
            base_tree,
            tree: entries,
        };
        self.post(&path, &payload).await
    }

    pub async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &NewCommit,
    ) -> Result<Commit, GitHubError> {
        let path = format!("/repos/{}/{}/git/commits", owner, repo);
        self.post(&path, commit).await
    }
}
