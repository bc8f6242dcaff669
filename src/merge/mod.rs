//! Merge pipeline
//!
//! Pure pieces live in [`crate::auth`] and [`crate::message`]; this module
//! holds the effectful orchestration and the failure classifier.

mod classify;
mod execute;

pub use classify::{SUCCEEDED, classify};
pub use execute::{run_merge, success_message};
