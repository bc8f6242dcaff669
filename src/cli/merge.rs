//! Merge command - gate, merge, and report on the PR

use crate::cli::context::CommandContext;
use crate::cli::exit_code;
use crate::cli::style::{CHECK, CROSS, Stylize};
use anstream::{eprintln, println};
use slash_merge::config::Config;
use slash_merge::error::Error;
use slash_merge::merge::{run_merge, success_message};
use slash_merge::types::MergeOutcome;
use std::process::ExitCode;
use tracing::{error, info};

/// Run the merge command and map the outcome to an exit code
///
/// - `0`: merge (or auto-merge request) accepted, success comment posted
/// - `1`: failure reported on the PR
/// - `3`: the outcome could not be posted to the PR
/// - `4`: the GitHub client could not be created
pub async fn run_merge_command(config: &Config) -> ExitCode {
    let ctx = match CommandContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "failed to set up GitHub client");
            eprintln!("{} {e}", CROSS.danger());
            return ExitCode::from(exit_code::SETUP_FAILURE);
        }
    };

    let platform = ctx.platform.config();
    info!(
        repo = %platform.full_name(),
        pr_number = ctx.request.pr_number,
        method = %ctx.request.method,
        mode = ?ctx.request.mode,
        "starting merge"
    );

    match run_merge(
        &ctx.invocation,
        &ctx.request,
        ctx.platform.as_ref(),
        ctx.deadline,
    )
    .await
    {
        Ok(MergeOutcome::Success) => {
            let message = success_message(ctx.request.pr_number);
            println!("{} {message}", CHECK.success());
            ExitCode::SUCCESS
        }
        Ok(MergeOutcome::Failure(reason)) => {
            eprintln!("{} {}", CROSS.warn(), reason);
            ExitCode::from(exit_code::REPORTED_FAILURE)
        }
        Err(e @ Error::CommentDelivery { .. }) => {
            eprintln!("{} {e}", CROSS.danger());
            ExitCode::from(exit_code::COMMENT_DELIVERY_FAILURE)
        }
        Err(e) => {
            // run_merge reports everything else on the PR itself
            error!(error = %e, "unexpected error");
            eprintln!("{} {e}", CROSS.danger());
            ExitCode::from(exit_code::COMMENT_DELIVERY_FAILURE)
        }
    }
}
