//! Workflow types
//!
//! This module contains the local data shapes that parameterize a run.
//! For the GitHub wire types, see the `ghcp-github` crate.

use chrono::{DateTime, SecondsFormat, Utc};
use ghcp_github::Signature;
use serde::{Deserialize, Serialize};

/// Identity every commit is authored with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Signature stamped with `at`
    pub fn signature_at(&self, at: DateTime<Utc>) -> Signature {
        Signature {
            name: self.name.clone(),
            email: self.email.clone(),
            date: Some(at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

/// One file to commit: a repository-relative path and its full new content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFile {
    pub path: String,
    pub content: String,
}

impl CommitFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Title, body and draft flag of the pull request to open or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContent {
    pub title: String,
    pub body: String,
    /// Only honoured when a new pull request is opened
    pub draft: bool,
}

/// Everything one run publishes: files onto a feature branch, then a pull request
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub owner: String,
    pub repo: String,
    pub base_branch: String,
    pub feature_branch: String,
    pub files: Vec<CommitFile>,
    pub commit_message: String,
    pub pull_request: PullRequestContent,
}
