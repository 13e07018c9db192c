use anyhow::Result;
use clap::Parser;
use colored::*;
use ghcp::commands::{Command, CommandContext, PublishCommand};
use ghcp::config::{Config, ConfigBuilder};
use ghcp::utils::{self, FileSpec};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ghcp")]
#[command(about = "Commit files to a GitHub feature branch and open a pull request")]
#[command(version)]
struct Cli {
    /// Repository owner (user or organization)
    owner: String,

    /// Repository name
    repo: String,

    /// Feature branch to create or update
    branch: String,

    /// Base branch the feature branch starts from and the pull request targets
    #[arg(long)]
    base: Option<String>,

    /// Commit message
    #[arg(short = 'm', long)]
    message: Option<String>,

    /// Title for the pull request
    #[arg(long)]
    title: Option<String>,

    /// Body text for the pull request
    #[arg(long)]
    body: Option<String>,

    /// Open a new pull request as draft
    #[arg(long)]
    draft: bool,

    /// File, directory or glob to commit; LOCAL:REMOTE commits it at REMOTE
    /// (can be specified multiple times). A LOCAL containing ':' is only
    /// taken literally when that path exists
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    files: Vec<FileSpec>,

    /// Configuration file path (default: ghcp.yaml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// GitHub token (default: GITHUB_TOKEN environment variable)
    #[arg(long)]
    token: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise
    #[arg(long)]
    api_url: Option<String>,

    /// Commit author name
    #[arg(long)]
    author_name: Option<String>,

    /// Commit author email
    #[arg(long)]
    author_email: Option<String>,

    /// Deadline for the whole run, in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = utils::exit_code_for(&e);
            eprintln!("{} {:#}", "error:".red().bold(), e);
            tracing::debug!(
                code,
                description = utils::get_exit_code_description(code),
                "Exiting"
            );
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?.with_env();
    let config = ConfigBuilder::from_config(config)
        .with_token(cli.token)
        .with_api_base(cli.api_url)
        .with_base_branch(cli.base)
        .with_commit_message(cli.message)
        .with_title(cli.title)
        .with_body(cli.body)
        .as_draft(cli.draft)
        .with_author(cli.author_name, cli.author_email)
        .with_timeout_secs(cli.timeout)
        .build()?;

    let command = PublishCommand {
        owner: cli.owner,
        repo: cli.repo,
        branch: cli.branch,
        files: cli.files,
    };

    command.execute(&CommandContext::new(config)).await
}
