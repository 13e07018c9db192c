//! Request payloads and response shapes for the endpoints this crate calls

use serde::{Deserialize, Serialize};

/// The object a ref points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitObject {
    pub sha: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A named pointer to a Git object, e.g. `refs/heads/main`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "ref")]
    pub name: String,
    pub object: GitObject,
}

impl Reference {
    /// SHA of the object this reference targets
    pub fn target(&self) -> &str {
        &self.object.sha
    }
}

/// A SHA-only pointer used for commit trees and parents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    pub sha: String,
}

/// Commit author or committer identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub email: String,
    /// ISO 8601 timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A Git commit object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    #[serde(default)]
    pub message: String,
    pub tree: ObjectRef,
    #[serde(default)]
    pub parents: Vec<ObjectRef>,
    #[serde(default)]
    pub author: Option<Signature>,
}

/// Payload for creating a blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBlob {
    pub content: String,
    pub encoding: String,
}

/// A created blob
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Blob {
    pub sha: String,
}

/// One path in a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub sha: Option<String>,
}

/// A Git tree object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tree {
    pub sha: String,
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
}

#[derive(Serialize)]
pub(crate) struct CreateTreePayload<'a> {
    pub base_tree: &'a str,
    pub tree: &'a [TreeEntry],
}

/// Payload for creating a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCommit {
    pub message: String,
    pub tree: String,
    pub parents: Vec<String>,
    pub author: Signature,
}

#[derive(Serialize)]
pub(crate) struct CreateRefPayload<'a> {
    #[serde(rename = "ref")]
    pub name: String,
    pub sha: &'a str,
}

#[derive(Serialize)]
pub(crate) struct UpdateRefPayload<'a> {
    pub sha: &'a str,
    pub force: bool,
}

/// Head or base side of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub name: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub html_url: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: String,
    pub head: BranchRef,
    pub base: BranchRef,
    #[serde(default)]
    pub draft: bool,
}

/// Payload for opening a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPullRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
}

/// Payload for editing an open pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestUpdate {
    pub title: String,
    pub body: String,
}
