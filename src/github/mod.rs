//! GitHub integration module
//!
//! This module drives the branch → commit → pull request workflow against
//! GitHub's REST API. Low-level HTTP calls and wire types live in the
//! `ghcp-github` crate; this module adds the workflow on top.
//!
//! ## Architecture
//!
//! - [`host`]: The [`GitHost`] trait, implemented by `GitHubClient`
//! - [`service`]: [`RepoMutationService`] and the full publish pipeline
//! - [`branch`]: Feature branch lookup and creation
//! - [`commit`]: Blob, tree and commit creation, ref update
//! - [`pull_requests`]: Pull request creation or update
//! - [`types`]: Author, files and publish request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ghcp::config::Config;
//! use ghcp::github::{CommitFile, PublishRequest, PullRequestContent, RepoMutationService};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::default();
//! let service = RepoMutationService::from_config(&config)?;
//!
//! let pr = service
//!     .publish(&PublishRequest {
//!         owner: "acme".to_string(),
//!         repo: "widgets".to_string(),
//!         base_branch: "master".to_string(),
//!         feature_branch: "feature/x".to_string(),
//!         files: vec![CommitFile::new("test.txt", "foobarbaz")],
//!         commit_message: "test commit".to_string(),
//!         pull_request: PullRequestContent {
//!             title: "test pull request".to_string(),
//!             body: "This is a test pull request.".to_string(),
//!             draft: false,
//!         },
//!     })
//!     .await?;
//! println!("{}", pr.html_url);
//! # Ok(())
//! # }
//! ```

pub mod branch;
pub mod commit;
pub mod host;
pub mod pull_requests;
pub mod service;
pub mod types;

// Re-export commonly used items for convenience
pub use ghcp_github::{GitHubClient, GitHubError, PullRequest, Reference};
pub use host::GitHost;
pub use service::RepoMutationService;
pub use types::{Author, CommitFile, PublishRequest, PullRequestContent};
