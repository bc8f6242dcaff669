//! Binary-side glue: logging, styling, and the merge command

mod context;
mod logging;
mod merge;
mod style;

pub use logging::init_tracing;
pub use merge::run_merge_command;

/// Exit codes for the process
pub mod exit_code {
    /// Failure reported on the PR
    pub const REPORTED_FAILURE: u8 = 1;
    /// The outcome could not be posted to the PR
    pub const COMMENT_DELIVERY_FAILURE: u8 = 3;
    /// The GitHub client could not be set up
    pub const SETUP_FAILURE: u8 = 4;
}
