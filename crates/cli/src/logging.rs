//! Tracing subscriber setup.
//!
//! Responsibilities:
//! - Install the global subscriber once configuration has been resolved.
//! - Pick the filter from `RUST_LOG`, else from the resolved `log.level`.
//!
//! Invariants:
//! - Log output goes to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::LogFormat;

const FALLBACK_LEVEL: &str = "info";

/// Build the filter: `RUST_LOG` wins, then `level`, then `info`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.trim()))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

pub fn init(format: LogFormat, level: &str) {
    let filter = build_filter(level);
    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
