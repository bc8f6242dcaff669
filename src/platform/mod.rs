//! Platform services for GitHub
//!
//! Everything the merge pipeline needs from the outside world sits behind
//! [`PlatformService`], so the orchestrator can be driven by a mock in tests.

mod gh_cli;
mod github;

pub use gh_cli::GhCli;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{CommitMessage, MergeMethod, PlatformConfig, PullRequestDetails};
use async_trait::async_trait;

/// Platform service trait for the merge pipeline
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Get PR metadata (title, body, labels)
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails>;

    /// Merge a PR now with the given commit message and method
    async fn merge_pr(
        &self,
        pr_number: u64,
        message: &CommitMessage,
        method: MergeMethod,
    ) -> Result<()>;

    /// Arm auto-merge so the platform merges once requirements pass
    async fn enable_auto_merge(
        &self,
        pr_number: u64,
        message: &CommitMessage,
        method: MergeMethod,
    ) -> Result<()>;

    /// Create a comment on a PR
    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<()>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
