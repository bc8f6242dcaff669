//! Merge execution - effectful operations
//!
//! Runs the pipeline for one invocation: gate, fetch, synthesize, merge,
//! report. Every outcome is posted to the PR as exactly one comment; only
//! a failure to post that comment escapes as an error.

use crate::auth::authorize;
use crate::error::{Error, Result};
use crate::merge::classify::classify;
use crate::message::synthesize;
use crate::platform::PlatformService;
use crate::types::{InvocationContext, MergeMode, MergeOutcome, MergeRequest};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

/// Comment posted after the merge (or auto-merge request) was accepted
pub fn success_message(pr_number: u64) -> String {
    format!("Merged PR #{pr_number} successfully!")
}

/// Bound a platform call by the invocation deadline
async fn until<T>(deadline: Instant, op: impl Future<Output = Result<T>>) -> Result<T> {
    tokio::time::timeout_at(deadline, op)
        .await
        .map_err(|_| Error::Timeout)?
}

/// Run the merge pipeline for one invocation (EFFECTFUL)
///
/// Returns `Ok(MergeOutcome::Failure)` when something went wrong and the
/// reason was posted to the PR. Returns `Err(Error::CommentDelivery)` when
/// the comment itself could not be posted.
///
/// # Arguments
/// * `ctx` - Trigger comment, actor and mergers allow-list
/// * `request` - PR number, merge method and mode
/// * `platform` - Platform service for API calls
/// * `deadline` - Point in time after which platform calls give up
pub async fn run_merge(
    ctx: &InvocationContext,
    request: &MergeRequest,
    platform: &dyn PlatformService,
    deadline: Instant,
) -> Result<MergeOutcome> {
    let pr_number = request.pr_number;

    match merge(ctx, request, platform, deadline).await {
        Ok(()) => {
            let message = success_message(pr_number);
            info!(pr_number, mode = ?request.mode, "merge request accepted");
            report(platform, pr_number, &message, deadline).await?;
            Ok(MergeOutcome::Success)
        }
        Err(e) => {
            let message = classify(Some(&e));
            warn!(pr_number, error = %e, "merge failed");
            report(platform, pr_number, &message, deadline).await?;
            Ok(MergeOutcome::Failure(message))
        }
    }
}

/// Gate, fetch, synthesize and merge; no reporting
async fn merge(
    ctx: &InvocationContext,
    request: &MergeRequest,
    platform: &dyn PlatformService,
    deadline: Instant,
) -> Result<()> {
    authorize(ctx)?;
    debug!(actor = %ctx.actor, "invocation authorized");

    let details = until(deadline, platform.get_pr_details(request.pr_number))
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    let message = synthesize(&details);
    debug!(url = %details.html_url, subject = %message.subject, "synthesized commit message");

    let op = match request.mode {
        MergeMode::Direct => platform.merge_pr(details.number, &message, request.method),
        MergeMode::Auto => platform.enable_auto_merge(details.number, &message, request.method),
    };
    until(deadline, op)
        .await
        .map_err(|e| Error::Merge(e.to_string()))
}

/// Post the outcome comment; failure here is fatal for the invocation
async fn report(
    platform: &dyn PlatformService,
    pr_number: u64,
    message: &str,
    deadline: Instant,
) -> Result<()> {
    until(deadline, platform.create_pr_comment(pr_number, message))
        .await
        .map_err(|e| {
            error!(pr_number, error = %e, undelivered = message, "failed to post comment");
            Error::CommentDelivery {
                message: e.to_string(),
                undelivered: message.to_string(),
            }
        })
}
