//! Error types for slash-merge

use thiserror::Error;

/// Errors that can stop a merge invocation
#[derive(Debug, Error)]
pub enum Error {
    /// The triggering comment is not the merge command
    #[error("comment must be /merge, got {comment}")]
    BadTrigger {
        /// Comment text that triggered the run
        comment: String,
    },

    /// The actor is missing from a non-empty mergers list
    #[error("actor {actor} is not in mergers list")]
    ActorNotAuthorized {
        /// User who triggered the run
        actor: String,
    },

    /// Fetching the pull request failed
    #[error("failed to get pull request: {0}")]
    Fetch(String),

    /// Merging (or arming auto-merge) failed
    #[error("failed to merge pull request: {0}")]
    Merge(String),

    /// GitHub API returned an error
    #[error("{0}")]
    GitHubApi(String),

    /// An external command exited unsuccessfully
    #[error("{tool} failed: {message}")]
    ExternalTool {
        /// Program name
        tool: String,
        /// Captured stderr or spawn error
        message: String,
    },

    /// The invocation deadline passed before the operation completed
    #[error("deadline exceeded before the operation completed")]
    Timeout,

    /// A comment could not be posted to the pull request
    #[error("failed to send message: {message} (undelivered: {undelivered})")]
    CommentDelivery {
        /// Why posting failed
        message: String,
        /// Text that should have been posted
        undelivered: String,
    },
}

impl From<octocrab::Error> for Error {
    fn from(e: octocrab::Error) -> Self {
        match e {
            // Keep GitHub's own wording; the classifier matches on it.
            octocrab::Error::GitHub { source, .. } => Self::GitHubApi(source.message.clone()),
            other => Self::GitHubApi(other.to_string()),
        }
    }
}

/// Result type alias for slash-merge operations
pub type Result<T> = std::result::Result<T, Error>;
