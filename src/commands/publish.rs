//! Publish command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::config::Config;
use crate::constants;
use crate::github::{
    CommitFile, GitHost, PublishRequest, PullRequest, PullRequestContent, RepoMutationService,
};
use crate::utils::{FileSpec, collect_files};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Commit files onto a feature branch and open (or update) its pull request
pub struct PublishCommand {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub files: Vec<FileSpec>,
}

impl PublishCommand {
    /// Check every argument that can be checked without the network
    pub fn validate(&self, config: &Config) -> Result<()> {
        validators::validate_owner(&self.owner)?;
        validators::validate_repository_name(&self.repo)?;
        validators::validate_branch_name("branch", &self.branch)?;
        validators::validate_branch_name("base", &config.base_branch)?;
        validators::validate_distinct_branches(&self.branch, &config.base_branch)?;

        for spec in &self.files {
            if let Some(remote) = &spec.remote {
                validators::validate_repository_path(remote)?;
            }
        }
        Ok(())
    }

    /// Validate arguments and read local files into a request
    ///
    /// Without `--file` arguments the sample file is committed.
    pub fn build_request(&self, config: &Config) -> Result<PublishRequest> {
        self.validate(config)?;

        let files = if self.files.is_empty() {
            vec![CommitFile::new(
                constants::git::SAMPLE_FILE_PATH,
                constants::git::SAMPLE_FILE_CONTENT,
            )]
        } else {
            collect_files(&self.files)?
        };

        Ok(PublishRequest {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            base_branch: config.base_branch.clone(),
            feature_branch: self.branch.clone(),
            files,
            commit_message: config.commit_message.clone(),
            pull_request: PullRequestContent {
                title: config.pull_request.title.clone(),
                body: config.pull_request.body.clone(),
                draft: config.pull_request.draft,
            },
        })
    }

    /// Run against any host; progress goes to stderr
    pub async fn publish_with<H: GitHost>(
        &self,
        service: &RepoMutationService<H>,
        context: &CommandContext,
    ) -> Result<PullRequest> {
        let request = self.build_request(&context.config)?;

        eprintln!(
            "{}",
            format!(
                "Publishing {} file(s) to {}/{} on branch {} (base {})",
                request.files.len(),
                request.owner,
                request.repo,
                request.feature_branch,
                request.base_branch
            )
            .green()
        );

        let pull_request = service
            .publish_within(&request, context.config.timeout())
            .await?;

        eprintln!(
            "{}",
            format!("Pull request #{} is ready", pull_request.number).green()
        );
        Ok(pull_request)
    }
}

#[async_trait]
impl Command for PublishCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let service = RepoMutationService::from_config(&context.config)?;
        let pull_request = self.publish_with(&service, context).await?;

        println!("{}", pull_request.html_url);
        Ok(())
    }
}
