//! Merge commit message synthesis
//!
//! Pure functions that turn PR metadata into the commit subject and body
//! sent with the merge request.

mod release_note;

pub use release_note::{NO_RELEASE_NOTE, extract_release_note};

use crate::types::{CommitMessage, PullRequestDetails, ReleaseNoteExtraction};
use std::fmt::Write;

/// Build the merge commit subject and body for a PR
pub fn synthesize(pr: &PullRequestDetails) -> CommitMessage {
    CommitMessage {
        subject: commit_subject(pr),
        body: commit_body(pr),
    }
}

/// `"<title> (#<number>)"`
pub fn commit_subject(pr: &PullRequestDetails) -> String {
    format!("{} (#{})", pr.title, pr.number)
}

/// Commit body: description, labels, release-note fence
///
/// Sections are separated by a blank line. The description and label
/// sections are left out entirely when empty; the release-note fence is
/// always present.
pub fn commit_body(pr: &PullRequestDetails) -> String {
    let ReleaseNoteExtraction {
        description,
        release_note,
    } = extract_release_note(pr.body.as_deref().unwrap_or_default());

    let mut sections = Vec::with_capacity(3);

    let description = description.trim_end().trim_start_matches(['\r', '\n']);
    if !description.is_empty() {
        sections.push(description.to_string());
    }

    if !pr.labels.is_empty() {
        let mut labels = String::from("Labels:");
        for label in &pr.labels {
            let _ = write!(labels, "\n  * {label}");
        }
        sections.push(labels);
    }

    sections.push(format!("```release-note\n* {release_note}\n```"));

    sections.join("\n\n")
}
