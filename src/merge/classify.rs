//! Turn errors into the text posted on the pull request

use crate::error::Error;
use regex::Regex;
use std::sync::LazyLock;

/// GitHub's wording when branch protection wants more approvals
static NEED_APPROVAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[Aa]t least ([0-9]+) approving review is required by reviewers with write access")
        .expect("approval pattern is a valid regex")
});

/// Message posted when nothing went wrong
pub const SUCCEEDED: &str = "Succeeded!";

/// User-facing message for an error
///
/// Missing approvals are reported as `"Need N approving review"`; any other
/// error is shown as-is. `None` yields `"Succeeded!"`.
pub fn classify(err: Option<&Error>) -> String {
    let Some(err) = err else {
        return SUCCEEDED.to_string();
    };

    let text = err.to_string();
    if let Some(caps) = NEED_APPROVAL.captures(&text) {
        return format!("Need {} approving review", &caps[1]);
    }
    text
}
