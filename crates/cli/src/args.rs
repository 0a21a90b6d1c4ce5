//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Provide config path resolution helpers.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not resolve configuration (see `stratum_config::initialize`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use stratum_config::env_var_or_none;

/// Environment variable naming a configuration file when `--config` is absent.
pub const CONFIG_PATH_VAR: &str = "STRATUM_CONFIG_PATH";

#[derive(Parser)]
#[command(name = "stratum")]
#[command(about = "Resolve and inspect Stratum service configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  stratum show\n  stratum --config ./service.yaml show --format json\n  STRATUM_CORE_WORK_POOL_SIZE=50 stratum show\n  stratum check\n  stratum env\n"
)]
pub struct Cli {
    /// Path to a configuration file (skips the search locations).
    ///
    /// Can also be set via STRATUM_CONFIG_PATH environment variable.
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The explicit config path: `--config`, else `STRATUM_CONFIG_PATH`.
    ///
    /// Blank or whitespace-only values are ignored at both levels.
    pub fn config_path(&self) -> Option<PathBuf> {
        select_config_path(self.config_path.as_deref(), || env_var_or_none(CONFIG_PATH_VAR))
    }
}

/// Prefer a non-blank flag value, otherwise fall back to the (already trimmed) env value.
fn select_config_path(
    flag: Option<&Path>,
    env_value: impl FnOnce() -> Option<String>,
) -> Option<PathBuf> {
    flag.filter(|path| !path.to_string_lossy().trim().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| env_value().map(PathBuf::from))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved configuration (credentials redacted)
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Report where the configuration came from and which capabilities are compiled in
    Check,

    /// List every configuration key with its environment override variable
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
