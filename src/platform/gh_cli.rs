//! Auto-merge through the GitHub CLI
//!
//! `gh pr merge --auto` arms auto-merge without us having to speak GraphQL.
//! The token is handed over through `GH_TOKEN`, so `gh` needs no login.

use crate::error::{Error, Result};
use crate::types::{CommitMessage, MergeMethod};
use tokio::process::Command;
use tracing::debug;

/// Default program name
const GH: &str = "gh";

/// Runner for `gh` commands
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    token: String,
    host: Option<String>,
}

impl GhCli {
    /// Runner for the `gh` on `PATH`
    pub fn new(token: &str, host: Option<String>) -> Self {
        Self::with_program(GH, token, host)
    }

    /// Runner for a specific executable
    pub fn with_program(program: &str, token: &str, host: Option<String>) -> Self {
        Self {
            program: program.to_string(),
            token: token.to_string(),
            host,
        }
    }

    /// Arguments for `gh pr merge --auto`
    pub fn auto_merge_args(
        repo: &str,
        pr_number: u64,
        message: &CommitMessage,
        method: MergeMethod,
    ) -> Vec<String> {
        vec![
            "pr".to_string(),
            "merge".to_string(),
            pr_number.to_string(),
            format!("--{method}"),
            "--auto".to_string(),
            "--subject".to_string(),
            message.subject.clone(),
            "--body".to_string(),
            message.body.clone(),
            "--repo".to_string(),
            repo.to_string(),
        ]
    }

    /// Arm auto-merge for a PR in `owner/repo`
    pub async fn enable_auto_merge(
        &self,
        repo: &str,
        pr_number: u64,
        message: &CommitMessage,
        method: MergeMethod,
    ) -> Result<()> {
        debug!(pr_number, %method, repo, "running gh pr merge --auto");

        let mut cmd = Command::new(&self.program);
        cmd.args(Self::auto_merge_args(repo, pr_number, message, method))
            .env("GH_TOKEN", &self.token)
            .env("GH_PROMPT_DISABLED", "1")
            .kill_on_drop(true);
        if let Some(ref host) = self.host {
            cmd.env("GH_HOST", host);
        }

        let output = cmd.output().await.map_err(|e| Error::ExternalTool {
            tool: self.program.clone(),
            message: format!("failed to execute: {e}"),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ExternalTool {
                tool: self.program.clone(),
                message: format!("{} ({})", stderr.trim(), output.status),
            });
        }

        debug!(pr_number, "auto-merge armed via gh");
        Ok(())
    }
}
