//! Shared command context for the merge command

use slash_merge::config::Config;
use slash_merge::error::Result;
use slash_merge::platform::{GitHubService, PlatformService};
use slash_merge::types::{InvocationContext, MergeRequest};
use tokio::time::Instant;

/// Everything the merge command needs, resolved from configuration
///
/// - Trigger comment, actor and allow-list for the gate
/// - What to merge and how
/// - The GitHub service
/// - The deadline shared by every GitHub call
pub struct CommandContext {
    /// Input to the authorization gate
    pub invocation: InvocationContext,
    /// PR number, method and mode
    pub request: MergeRequest,
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
    /// When pending GitHub calls give up
    pub deadline: Instant,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// The deadline starts counting here, before any network call.
    pub fn new(config: &Config) -> Result<Self> {
        let deadline = Instant::now() + config.timeout();

        let platform = GitHubService::new(
            &config.github_token,
            config.platform_config(),
            config.auto_merge_backend,
        )?;

        Ok(Self {
            invocation: config.invocation(),
            request: config.merge_request(),
            platform: Box::new(platform),
            deadline,
        })
    }
}
