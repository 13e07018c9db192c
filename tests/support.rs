//! Common test support utilities and fixtures
//!
//! [`FakeGitHost`] is an in-memory Git host: objects are content addressed,
//! refs are unique and only move forward, and at most one pull request is
//! open per head/base pair.

#![allow(dead_code)]

use async_trait::async_trait;
use ghcp::github::{Author, GitHost, GitHubError, RepoMutationService};
use ghcp_github::{
    Blob, BranchRef, Commit, GitObject, NewBlob, NewCommit, NewPullRequest, ObjectRef,
    PullRequest, PullRequestUpdate, Reference, Signature, Tree, TreeEntry,
};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::process::Command;
use std::sync::Mutex;
use std::time::Duration;

pub const OWNER: &str = "acme";
pub const REPO: &str = "widgets";

#[derive(Default)]
pub struct HostState {
    pub blobs: HashMap<String, String>,
    /// Tree SHA to (path -> blob SHA)
    pub trees: HashMap<String, BTreeMap<String, String>>,
    pub commits: HashMap<String, Commit>,
    /// Ref path (`heads/...`) to commit SHA
    pub refs: BTreeMap<String, String>,
    pub pulls: Vec<PullRequest>,
    pub calls: Vec<&'static str>,
    /// Operation that fails with a transport error
    pub fail_on: Option<&'static str>,
    /// Added latency per call
    pub delay: Option<Duration>,
}

#[derive(Default)]
pub struct FakeGitHost {
    state: Mutex<HostState>,
}

fn object_id(parts: &[&str]) -> String {
    let mut hasher = DefaultHasher::new();
    parts.hash(&mut hasher);
    let hash = hasher.finish();
    format!("{:016x}{:016x}", hash, hash.rotate_left(17))
}

impl FakeGitHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose repository has one branch with a single root commit holding `files`
    pub fn with_branch(branch: &str, files: &[(&str, &str)]) -> Self {
        let host = Self::new();
        host.seed_branch(branch, files);
        host
    }

    pub fn seed_branch(&self, branch: &str, files: &[(&str, &str)]) -> String {
        let mut state = self.state();
        let mut entries = BTreeMap::new();
        for (path, content) in files {
            let sha = object_id(&["blob", *content]);
            state.blobs.insert(sha.clone(), content.to_string());
            entries.insert(path.to_string(), sha);
        }
        let tree_sha = tree_id(&entries);
        state.trees.insert(tree_sha.clone(), entries);

        let sha = object_id(&["commit", "initial commit", &tree_sha, branch]);
        state.commits.insert(
            sha.clone(),
            Commit {
                sha: sha.clone(),
                message: "initial commit".to_string(),
                tree: ObjectRef { sha: tree_sha },
                parents: Vec::new(),
                author: None,
            },
        );
        state.refs.insert(format!("heads/{}", branch), sha.clone());
        sha
    }

    pub fn fail_on(&self, operation: &'static str) {
        self.state().fail_on = Some(operation);
    }

    pub fn set_delay(&self, delay: Duration) {
        self.state().delay = Some(delay);
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, HostState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state().calls.clone()
    }

    pub fn branch_sha(&self, branch: &str) -> Option<String> {
        self.state().refs.get(&format!("heads/{}", branch)).cloned()
    }

    pub fn commit(&self, sha: &str) -> Commit {
        self.state().commits[sha].clone()
    }

    /// Content of `path` at the tip of `branch`
    pub fn file_at(&self, branch: &str, path: &str) -> Option<String> {
        let state = self.state();
        let sha = state.refs.get(&format!("heads/{}", branch))?;
        let tree = &state.trees[&state.commits[sha].tree.sha];
        tree.get(path).map(|blob| state.blobs[blob].clone())
    }

    pub fn paths_at(&self, branch: &str) -> Vec<String> {
        let state = self.state();
        let sha = &state.refs[&format!("heads/{}", branch)];
        state.trees[&state.commits[sha].tree.sha]
            .keys()
            .cloned()
            .collect()
    }

    pub fn pulls(&self) -> Vec<PullRequest> {
        self.state().pulls.clone()
    }

    async fn enter(&self, operation: &'static str) -> Result<(), GitHubError> {
        let delay = {
            let mut state = self.state();
            state.calls.push(operation);
            if state.fail_on == Some(operation) {
                return Err(GitHubError::Transport(format!(
                    "injected failure in {}",
                    operation
                )));
            }
            state.delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(())
    }
}

fn tree_id(entries: &BTreeMap<String, String>) -> String {
    let mut parts = vec!["tree"];
    for (path, sha) in entries {
        parts.push(path.as_str());
        parts.push(sha.as_str());
    }
    object_id(&parts)
}

fn reference(ref_path: &str, sha: &str) -> Reference {
    Reference {
        name: format!("refs/{}", ref_path),
        object: GitObject {
            sha: sha.to_string(),
            kind: "commit".to_string(),
        },
    }
}

fn is_ancestor(state: &HostState, ancestor: &str, descendant: &str) -> bool {
    let mut pending = vec![descendant.to_string()];
    while let Some(sha) = pending.pop() {
        if sha == ancestor {
            return true;
        }
        if let Some(commit) = state.commits.get(&sha) {
            pending.extend(commit.parents.iter().map(|p| p.sha.clone()));
        }
    }
    false
}

#[async_trait]
impl GitHost for FakeGitHost {
    async fn get_ref(
        &self,
        _owner: &str,
        _repo: &str,
        ref_path: &str,
    ) -> Result<Reference, GitHubError> {
        self.enter("get_ref").await?;
        let state = self.state();
        state
            .refs
            .get(ref_path)
            .map(|sha| reference(ref_path, sha))
            .ok_or_else(|| GitHubError::NotFound(format!("404 Not Found: {}", ref_path)))
    }

    async fn create_ref(
        &self,
        _owner: &str,
        _repo: &str,
        ref_path: &str,
        sha: &str,
    ) -> Result<Reference, GitHubError> {
        self.enter("create_ref").await?;
        let mut state = self.state();
        if state.refs.contains_key(ref_path) {
            return Err(GitHubError::Conflict(
                "422 Unprocessable Entity: Reference already exists".to_string(),
            ));
        }
        if !state.commits.contains_key(sha) {
            return Err(GitHubError::Conflict(
                "422 Unprocessable Entity: Object does not exist".to_string(),
            ));
        }
        state.refs.insert(ref_path.to_string(), sha.to_string());
        Ok(reference(ref_path, sha))
    }

    async fn update_ref(
        &self,
        _owner: &str,
        _repo: &str,
        ref_path: &str,
        sha: &str,
    ) -> Result<Reference, GitHubError> {
        self.enter("update_ref").await?;
        let mut state = self.state();
        let current = state
            .refs
            .get(ref_path)
            .cloned()
            .ok_or_else(|| GitHubError::NotFound(format!("404 Not Found: {}", ref_path)))?;
        if !state.commits.contains_key(sha) {
            return Err(GitHubError::Conflict(
                "422 Unprocessable Entity: Object does not exist".to_string(),
            ));
        }
        if !is_ancestor(&state, &current, sha) {
            return Err(GitHubError::Conflict(
                "422 Unprocessable Entity: Update is not a fast forward".to_string(),
            ));
        }
        state.refs.insert(ref_path.to_string(), sha.to_string());
        Ok(reference(ref_path, sha))
    }

    async fn get_commit(
        &self,
        _owner: &str,
        _repo: &str,
        sha: &str,
    ) -> Result<Commit, GitHubError> {
        self.enter("get_commit").await?;
        self.state()
            .commits
            .get(sha)
            .cloned()
            .ok_or_else(|| GitHubError::NotFound(format!("404 Not Found: commit {}", sha)))
    }

    async fn create_blob(
        &self,
        _owner: &str,
        _repo: &str,
        blob: &NewBlob,
    ) -> Result<Blob, GitHubError> {
        self.enter("create_blob").await?;
        assert_eq!(blob.encoding, "utf-8");
        let sha = object_id(&["blob", &blob.content]);
        self.state().blobs.insert(sha.clone(), blob.content.clone());
        Ok(Blob { sha })
    }

    async fn create_tree(
        &self,
        _owner: &str,
        _repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<Tree, GitHubError> {
        self.enter("create_tree").await?;
        let mut state = self.state();
        let mut tree = state.trees.get(base_tree).cloned().ok_or_else(|| {
            GitHubError::Conflict("422 Unprocessable Entity: base_tree is invalid".to_string())
        })?;
        for entry in entries {
            assert_eq!(entry.mode, "100644");
            assert_eq!(entry.kind, "blob");
            let sha = entry.sha.clone().unwrap_or_default();
            if !state.blobs.contains_key(&sha) {
                return Err(GitHubError::Conflict(format!(
                    "422 Unprocessable Entity: tree.sha {} is not a valid blob",
                    sha
                )));
            }
            tree.insert(entry.path.clone(), sha);
        }
        let sha = tree_id(&tree);
        state.trees.insert(sha.clone(), tree);
        Ok(Tree {
            sha,
            tree: entries.to_vec(),
        })
    }

    async fn create_commit(
        &self,
        _owner: &str,
        _repo: &str,
        commit: &NewCommit,
    ) -> Result<Commit, GitHubError> {
        self.enter("create_commit").await?;
        let mut state = self.state();
        if !state.trees.contains_key(&commit.tree)
            || commit.parents.iter().any(|p| !state.commits.contains_key(p))
        {
            return Err(GitHubError::Conflict(
                "422 Unprocessable Entity: Tree or parent SHA does not exist".to_string(),
            ));
        }

        let date = commit.author.date.clone().unwrap_or_default();
        let mut parts = vec![
            "commit",
            commit.message.as_str(),
            commit.tree.as_str(),
            commit.author.name.as_str(),
            commit.author.email.as_str(),
            date.as_str(),
        ];
        parts.extend(commit.parents.iter().map(String::as_str));
        let sha = object_id(&parts);

        let created = Commit {
            sha: sha.clone(),
            message: commit.message.clone(),
            tree: ObjectRef {
                sha: commit.tree.clone(),
            },
            parents: commit
                .parents
                .iter()
                .map(|p| ObjectRef { sha: p.clone() })
                .collect(),
            author: Some(Signature {
                name: commit.author.name.clone(),
                email: commit.author.email.clone(),
                date: commit.author.date.clone(),
            }),
        };
        state.commits.insert(sha, created.clone());
        Ok(created)
    }

    async fn find_open_pull_requests(
        &self,
        _owner: &str,
        _repo: &str,
        head_branch: &str,
        base_branch: &str,
    ) -> Result<Vec<PullRequest>, GitHubError> {
        self.enter("find_open_pull_requests").await?;
        Ok(self
            .state()
            .pulls
            .iter()
            .filter(|pr| {
                pr.state == "open" && pr.head.name == head_branch && pr.base.name == base_branch
            })
            .cloned()
            .collect())
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_request: &NewPullRequest,
    ) -> Result<PullRequest, GitHubError> {
        self.enter("create_pull_request").await?;
        let mut state = self.state();
        let duplicate = state.pulls.iter().any(|pr| {
            pr.state == "open" && pr.head.name == pull_request.head && pr.base.name == pull_request.base
        });
        if duplicate {
            return Err(GitHubError::Conflict(format!(
                "422 Unprocessable Entity: A pull request already exists for {}:{}.",
                owner, pull_request.head
            )));
        }
        if !state.refs.contains_key(&format!("heads/{}", pull_request.head)) {
            return Err(GitHubError::Conflict(
                "422 Unprocessable Entity: Validation Failed".to_string(),
            ));
        }

        let number = state.pulls.len() as u64 + 1;
        let created = PullRequest {
            number,
            html_url: format!("https://github.com/{}/{}/pull/{}", owner, repo, number),
            title: pull_request.title.clone(),
            body: Some(pull_request.body.clone()),
            state: "open".to_string(),
            head: BranchRef {
                name: pull_request.head.clone(),
                label: format!("{}:{}", owner, pull_request.head),
            },
            base: BranchRef {
                name: pull_request.base.clone(),
                label: format!("{}:{}", owner, pull_request.base),
            },
            draft: pull_request.draft,
        };
        state.pulls.push(created.clone());
        Ok(created)
    }

    async fn update_pull_request(
        &self,
        _owner: &str,
        _repo: &str,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<PullRequest, GitHubError> {
        self.enter("update_pull_request").await?;
        let mut state = self.state();
        let pr = state
            .pulls
            .iter_mut()
            .find(|pr| pr.number == number)
            .ok_or_else(|| GitHubError::NotFound(format!("404 Not Found: pull {}", number)))?;
        pr.title = update.title.clone();
        pr.body = Some(update.body.clone());
        Ok(pr.clone())
    }
}

pub fn author() -> Author {
    Author::new("Octo Cat", "octocat@github.com")
}

pub fn service(host: FakeGitHost) -> RepoMutationService<FakeGitHost> {
    RepoMutationService::new(host, author())
}

/// Result of running the ghcp binary
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the built binary in `cwd` with no token or API override in its environment
pub fn run_cli(args: &[&str], cwd: &Path) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_ghcp"))
        .args(args)
        .current_dir(cwd)
        .env_remove("GITHUB_TOKEN")
        .env_remove("GHCP_API_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute ghcp");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
