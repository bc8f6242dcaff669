//! Tracing setup for the binary
//!
//! Logs go to stderr so stdout only carries the result line. `RUST_LOG`
//! overrides the default `info` level.

use slash_merge::config::LogFormat;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber; later calls are ignored
pub fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init()
            .ok(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .ok(),
    };
}
