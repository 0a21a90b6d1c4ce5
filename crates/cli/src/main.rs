//! Stratum CLI - resolve and inspect service configuration.
//!
//! Responsibilities:
//! - Run the bootstrap sequence a Stratum service uses at startup.
//! - Print the resolved configuration and its provenance.
//!
//! Does NOT handle:
//! - Configuration resolution itself (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can supply `STRATUM_*` values.
//! - The process-wide configuration is initialized before any subcommand runs.
//! - Tracing is installed after resolution so the resolved `log.level` can drive it.

mod args;
mod commands;
mod error;
mod logging;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use commands::run_command;
use error::{ExitCode, ExitCodeExt};

fn main() {
    // Load .env file first so STRATUM_CONFIG_PATH and overrides can come from it
    if let Err(e) = stratum_config::load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::from(&e).as_i32());
    }

    let cli = Cli::parse();

    let config_path = cli.config_path();
    let config = match stratum_config::initialize(config_path.as_deref())
        .context("Failed to resolve configuration")
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    logging::init(cli.log_format, &config.log.level);
    tracing::debug!(origin = %config.origin(), "Configuration ready");

    let exit_code = match run_command(&cli.command, config) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
