//! CLI command implementations.

pub mod check;
pub mod env;
pub mod show;

use anyhow::Result;
use stratum_config::ResolvedConfig;

use crate::args::Commands;

/// Dispatch a parsed subcommand against the published configuration.
pub fn run_command(command: &Commands, config: &ResolvedConfig) -> Result<()> {
    match command {
        Commands::Show { format } => show::run(config, *format),
        Commands::Check => check::run(config),
        Commands::Env => env::run(config.capabilities()),
    }
}
