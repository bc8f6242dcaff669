//! Authorization gate for merge requests
//!
//! Decides whether a run may proceed based on the triggering comment and
//! the mergers allow-list. No I/O happens here.

use crate::error::{Error, Result};
use crate::types::InvocationContext;

/// Comment text that requests a merge
pub const MERGE_COMMENT: &str = "/merge";

/// Check that the comment is the merge command and the actor may merge
///
/// An empty mergers list leaves the gate open to any actor. Otherwise the
/// actor must match an entry exactly (case-sensitive).
pub fn authorize(ctx: &InvocationContext) -> Result<()> {
    if ctx.comment != MERGE_COMMENT {
        return Err(Error::BadTrigger {
            comment: ctx.comment.clone(),
        });
    }

    if ctx.mergers.is_empty() || ctx.mergers.iter().any(|m| *m == ctx.actor) {
        return Ok(());
    }

    Err(Error::ActorNotAuthorized {
        actor: ctx.actor.clone(),
    })
}
