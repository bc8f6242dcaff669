//! Core types for slash-merge

use serde::{Deserialize, Serialize};

/// Who asked for the merge, and who is allowed to
///
/// Built once per run from configuration and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Text of the comment that triggered the run
    pub comment: String,
    /// GitHub login of the user who posted the comment
    pub actor: String,
    /// Logins allowed to merge; empty means anyone may
    pub mergers: Vec<String>,
}

/// Pull request metadata needed to build the merge commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetails {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR description (free text)
    pub body: Option<String>,
    /// Label names, in the order GitHub returned them
    pub labels: Vec<String>,
    /// Web URL for the PR
    pub html_url: String,
    /// GraphQL node ID (used for the auto-merge mutation)
    pub node_id: Option<String>,
}

/// Subject and body for the merge commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line of the commit
    pub subject: String,
    /// Everything after the subject
    pub body: String,
}

/// A PR description split into prose and its release note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNoteExtraction {
    /// Description with the release-note block removed (when it had content)
    pub description: String,
    /// Trimmed release note, or `"NONE"`
    pub release_note: String,
}

/// Result of a merge invocation that managed to report itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Merge (or auto-merge request) accepted and success comment posted
    Success,
    /// Something failed; the reason was posted to the PR
    Failure(String),
}

impl MergeOutcome {
    /// Check if the invocation succeeded
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MergeMethod {
    /// Create a merge commit
    #[default]
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto base branch
    Rebase,
}

impl MergeMethod {
    /// Value of GitHub's `PullRequestMergeMethod` GraphQL enum
    pub const fn graphql_name(self) -> &'static str {
        match self {
            Self::Merge => "MERGE",
            Self::Squash => "SQUASH",
            Self::Rebase => "REBASE",
        }
    }
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Squash => write!(f, "squash"),
            Self::Rebase => write!(f, "rebase"),
        }
    }
}

/// Whether to merge now or arm auto-merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Merge immediately through the REST API
    #[default]
    Direct,
    /// Ask GitHub to merge once requirements are met
    Auto,
}

impl MergeMode {
    /// Pick the mode from the `enable_auto_merge` input
    pub const fn from_auto_merge(enabled: bool) -> Self {
        if enabled { Self::Auto } else { Self::Direct }
    }
}

/// What to merge and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRequest {
    /// PR number
    pub pr_number: u64,
    /// Merge method passed to GitHub
    pub method: MergeMethod,
    /// Immediate merge or auto-merge
    pub mode: MergeMode,
}

/// How auto-merge gets armed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AutoMergeBackend {
    /// Shell out to `gh pr merge --auto`
    #[default]
    GhCli,
    /// Call the `enablePullRequestAutoMerge` GraphQL mutation
    #[value(name = "graphql")]
    GraphQl,
}

/// Repository coordinates and API location
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// GitHub Enterprise host (None for github.com)
    pub host: Option<String>,
    /// Explicit REST API base URL, overriding `host`
    pub api_url: Option<url::Url>,
}

impl PlatformConfig {
    /// `owner/repo` as accepted by `gh --repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
