//! slash-merge: merge a GitHub pull request from a `/merge` comment
//!
//! The crate is split into a pure core and an effectful shell:
//!
//! - [`auth`] decides whether the triggering comment and actor may merge
//! - [`message`] builds the merge commit subject and body from PR metadata
//! - [`merge`] runs the pipeline and classifies failures for the PR thread
//! - [`platform`] talks to GitHub (REST, GraphQL, and the `gh` CLI)

pub mod auth;
pub mod config;
pub mod error;
pub mod merge;
pub mod message;
pub mod platform;
pub mod types;
