//! ghcp - Commit files to a GitHub feature branch and open a pull request

pub mod commands;
pub mod config;
pub mod constants;
pub mod github;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext, PublishCommand};
pub use config::{Config, ConfigBuilder};
pub use github::{GitHost, GitHubError, PublishRequest, RepoMutationService};
