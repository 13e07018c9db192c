//! GitHub API client library
//!
//! This library provides the low-level interface to the parts of GitHub's REST
//! API that `ghcp` drives: the Git Data API (refs, commits, blobs, trees) and
//! pull requests.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client, authentication and request plumbing
//! - [`error`]: Typed errors classified from HTTP responses
//! - [`git_data`]: Refs, commits, blobs and trees
//! - [`pull_requests`]: Pull request creation, lookup and update
//! - [`types`]: Request payloads and response shapes

mod client;
mod error;
mod git_data;
mod pull_requests;
mod types;

// Re-export public API
pub use client::{ClientOptions, DEFAULT_API_BASE, DEFAULT_USER_AGENT, GitHubClient};
pub use error::GitHubError;
pub use types::{
    Blob, BranchRef, Commit, GitObject, NewBlob, NewCommit, NewPullRequest, ObjectRef,
    PullRequest, PullRequestUpdate, Reference, Signature, Tree, TreeEntry,
};
