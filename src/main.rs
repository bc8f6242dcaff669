//! slash-merge CLI entry point

mod cli;

use clap::Parser;
use slash_merge::config::Config;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    cli::init_tracing(config.log_format);
    cli::run_merge_command(&config).await
}
