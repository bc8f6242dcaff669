//! Shared test helpers

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{CreateCommentCall, MergePrCall, MockPlatformService, make_pr};

use slash_merge::types::{InvocationContext, PlatformConfig};

/// Platform config for `test/repo` on github.com
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        owner: "test".to_string(),
        repo: "repo".to_string(),
        host: None,
        api_url: None,
    }
}

/// Invocation triggered by `/merge` from `actor`
pub fn merge_invocation(actor: &str, mergers: &[&str]) -> InvocationContext {
    InvocationContext {
        comment: "/merge".to_string(),
        actor: actor.to_string(),
        mergers: mergers.iter().map(ToString::to_string).collect(),
    }
}
