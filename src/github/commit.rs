//! Commit construction through the Git Data API

use super::host::GitHost;
use super::service::RepoMutationService;
use super::types::CommitFile;
use crate::constants::git::{BLOB_ENCODING, BLOB_TYPE, REGULAR_FILE_MODE};
use chrono::Utc;
use ghcp_github::{Commit, GitHubError, NewBlob, NewCommit, Reference, TreeEntry};
use tracing::debug;

impl<H: GitHost> RepoMutationService<H> {
    /// Commit `files` on top of the commit `reference` points at, then move
    /// `reference` to the new commit
    ///
    /// One blob is created per file, in order, and a single tree and commit
    /// are created for the whole batch. Paths already in the parent tree are
    /// replaced, new paths are added. With no files the parent's tree is
    /// reused as is.
    ///
    /// The ref update is not forced: if the branch moved since it was read,
    /// GitHub rejects the update with [`GitHubError::Conflict`]. Objects
    /// created before a failure are left unreferenced.
    ///
    /// # Returns
    /// The new commit; `reference` is updated in place to target it.
    pub async fn create_or_update_commit(
        &self,
        owner: &str,
        repo: &str,
        reference: &mut Reference,
        files: &[CommitFile],
        message: &str,
    ) -> Result<Commit, GitHubError> {
        let parent = self.host.get_commit(owner, repo, reference.target()).await?;

        let mut entries = Vec::with_capacity(files.len());
        for file in files {
            let blob = self
                .host
                .create_blob(
                    owner,
                    repo,
                    &NewBlob {
                        content: file.content.clone(),
                        encoding: BLOB_ENCODING.to_string(),
                    },
                )
                .await?;
            debug!(path = %file.path, sha = %blob.sha, "Created blob");

            entries.push(TreeEntry {
                path: file.path.clone(),
                mode: REGULAR_FILE_MODE.to_string(),
                kind: BLOB_TYPE.to_string(),
                sha: Some(blob.sha),
            });
        }

        let tree_sha = if entries.is_empty() {
            parent.tree.sha.clone()
        } else {
            let tree = self
                .host
                .create_tree(owner, repo, &parent.tree.sha, &entries)
                .await?;
            debug!(sha = %tree.sha, entries = entries.len(), "Created tree");
            tree.sha
        };

        let commit = self
            .host
            .create_commit(
                owner,
                repo,
                &NewCommit {
                    message: message.to_string(),
                    tree: tree_sha,
                    parents: vec![parent.sha.clone()],
                    author: self.author.signature_at(Utc::now()),
                },
            )
            .await?;

        let ref_path = reference
            .name
            .strip_prefix("refs/")
            .unwrap_or(&reference.name)
            .to_string();
        *reference = self
            .host
            .update_ref(owner, repo, &ref_path, &commit.sha)
            .await?;

        Ok(commit)
    }
}
