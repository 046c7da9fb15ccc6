//! Tracing subscriber setup for the command-line tool.

use tracing_subscriber::{EnvFilter, filter::Directive, filter::LevelFilter, fmt, prelude::*};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Installs a stderr `fmt` subscriber.
///
/// `level` is the default directive; `RUST_LOG` overrides it. An unknown
/// level falls back to `info`.
pub fn init_logging(level: &str) {
    let known = LOG_LEVELS.contains(&level);
    let level = if known { level } else { "info" };

    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse::<Directive>()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();

    if !known {
        tracing::warn!("Invalid log level, defaulting to 'info'");
    }
}
