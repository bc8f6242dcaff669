//! Invocation configuration
//!
//! Every option can be passed as a flag or through the `INPUT_*` variables
//! GitHub Actions sets for action inputs.

use crate::types::{
    AutoMergeBackend, InvocationContext, MergeMethod, MergeMode, MergeRequest, PlatformConfig,
};
use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};
use std::time::Duration;
use url::Url;

/// Default wall-clock budget for one invocation
pub const DEFAULT_TIMEOUT_SECS: u64 = 10 * 60;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Newline-delimited JSON
    Json,
}

/// Merge a pull request in response to a /merge comment
#[derive(Debug, Clone, Parser)]
#[command(name = "slash-merge", version, about)]
pub struct Config {
    /// GitHub token used for API calls and the gh CLI
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Repository owner
    #[arg(long, env = "INPUT_OWNER")]
    pub owner: String,

    /// Repository name
    #[arg(long, env = "INPUT_REPO")]
    pub repo: String,

    /// Pull request number
    #[arg(long, env = "INPUT_PR_NUMBER")]
    pub pr_number: u64,

    /// Text of the comment that triggered the run
    #[arg(long, env = "INPUT_COMMENT", allow_hyphen_values = true, default_value = "")]
    pub comment: String,

    /// GitHub login of the user who triggered the run
    #[arg(long, env = "INPUT_GITHUB_ACTOR", default_value = "")]
    pub actor: String,

    /// Comma-separated logins allowed to merge (empty: anyone)
    #[arg(long, env = "INPUT_MERGERS", value_delimiter = ',')]
    pub mergers: Vec<String>,

    /// Merge method
    #[arg(long, env = "INPUT_MERGE_METHOD", value_enum, default_value_t = MergeMethod::Merge)]
    pub merge_method: MergeMethod,

    /// Arm auto-merge instead of merging immediately
    #[arg(
        long,
        env = "INPUT_ENABLE_AUTO_MERGE",
        value_parser = BoolishValueParser::new(),
        default_value = "false",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub enable_auto_merge: bool,

    /// How auto-merge is armed
    #[arg(
        long,
        env = "INPUT_AUTO_MERGE_BACKEND",
        value_enum,
        default_value_t = AutoMergeBackend::GhCli
    )]
    pub auto_merge_backend: AutoMergeBackend,

    /// GitHub Enterprise host (e.g. github.example.com)
    #[arg(long, env = "INPUT_GITHUB_HOST")]
    pub github_host: Option<String>,

    /// REST API base URL, overriding --github-host
    #[arg(long, env = "INPUT_API_URL")]
    pub api_url: Option<Url>,

    /// Seconds before pending GitHub calls are abandoned
    #[arg(long, env = "INPUT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log output format
    #[arg(long, env = "INPUT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    /// Trigger, actor and allow-list for the authorization gate
    ///
    /// Allow-list entries are trimmed and blank entries dropped, so an
    /// empty `INPUT_MERGERS` leaves the gate open.
    pub fn invocation(&self) -> InvocationContext {
        InvocationContext {
            comment: self.comment.clone(),
            actor: self.actor.clone(),
            mergers: self
                .mergers
                .iter()
                .map(|m| m.trim())
                .filter(|m| !m.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// PR number, method and mode for the orchestrator
    pub const fn merge_request(&self) -> MergeRequest {
        MergeRequest {
            pr_number: self.pr_number,
            method: self.merge_method,
            mode: MergeMode::from_auto_merge(self.enable_auto_merge),
        }
    }

    /// Repository coordinates for the platform service
    pub fn platform_config(&self) -> PlatformConfig {
        PlatformConfig {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            host: self.github_host.clone().filter(|h| !h.is_empty()),
            api_url: self.api_url.clone(),
        }
    }

    /// Wall-clock budget for the invocation
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: [&str; 11] = [
        "slash-merge",
        "--github-token",
        "t0ken",
        "--owner",
        "acme",
        "--repo",
        "widgets",
        "--pr-number",
        "7",
        "--comment",
        "/merge",
    ];

    fn parse(extra: &[&str]) -> Config {
        Config::try_parse_from(BASE.iter().chain(extra)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.merge_method, MergeMethod::Merge);
        assert!(!config.enable_auto_merge);
        assert_eq!(config.auto_merge_backend, AutoMergeBackend::GhCli);
        assert_eq!(config.timeout(), Duration::from_secs(600));
        assert_eq!(config.merge_request().mode, MergeMode::Direct);
        assert!(config.invocation().mergers.is_empty());
    }

    #[test]
    fn test_mergers_are_split_and_trimmed() {
        let config = parse(&["--mergers", "alice, bob,,carol "]);
        assert_eq!(config.invocation().mergers, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_auto_merge_flag() {
        let config = parse(&["--enable-auto-merge", "true", "--merge-method", "squash"]);
        let request = config.merge_request();
        assert_eq!(request.mode, MergeMode::Auto);
        assert_eq!(request.method, MergeMethod::Squash);
        assert_eq!(request.pr_number, 7);

        let config = parse(&["--enable-auto-merge"]);
        assert!(config.enable_auto_merge);

        let config = parse(&["--enable-auto-merge", "false"]);
        assert!(!config.enable_auto_merge);
    }

    #[test]
    fn test_unknown_merge_method_rejected() {
        let result = Config::try_parse_from(BASE.iter().chain(&["--merge-method", "octopus"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_host_is_ignored() {
        let config = parse(&["--github-host", ""]);
        assert!(config.platform_config().host.is_none());

        let config = parse(&["--github-host", "ghe.example.com"]);
        assert_eq!(
            config.platform_config().host.as_deref(),
            Some("ghe.example.com")
        );
    }
}
