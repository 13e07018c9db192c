//! Central constants for the ghcp application

/// Default values for Git operations
pub mod git {
    /// Namespace branch names live under, relative to `refs/`
    pub const BRANCH_REF_PREFIX: &str = "heads/";

    /// Default base branch feature branches are cut from
    pub const DEFAULT_BASE_BRANCH: &str = "master";

    /// Default commit message when none is provided
    pub const DEFAULT_COMMIT_MSG: &str = "test commit";

    /// Tree entry mode for a regular, non-executable file
    pub const REGULAR_FILE_MODE: &str = "100644";

    /// Tree entry type for file contents
    pub const BLOB_TYPE: &str = "blob";

    /// Encoding declared for every blob
    pub const BLOB_ENCODING: &str = "utf-8";

    /// Path of the file committed when no files are given
    pub const SAMPLE_FILE_PATH: &str = "test.txt";

    /// Content of the file committed when no files are given
    pub const SAMPLE_FILE_CONTENT: &str = "foobarbaz";
}

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = ghcp_github::DEFAULT_API_BASE;

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = ghcp_github::DEFAULT_USER_AGENT;

    /// Environment variable holding the access token
    pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV: &str = "GHCP_API_URL";

    /// Deadline for a whole run, in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default pull request title
    pub const DEFAULT_PR_TITLE: &str = "test pull request";

    /// Default pull request body
    pub const DEFAULT_PR_BODY: &str = "This is a test pull request.";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "ghcp.yaml";

    /// Author name used when neither config nor flags set one
    pub const DEFAULT_AUTHOR_NAME: &str = "ghcp";

    /// Author email used when neither config nor flags set one
    pub const DEFAULT_AUTHOR_EMAIL: &str = "ghcp@users.noreply.github.com";
}
