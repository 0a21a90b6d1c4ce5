//! Shared test utilities for stratum integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Isolate the search locations from the host's home and working directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - No `STRATUM_*` override from the host reaches the child process.
//! - `/etc/stratum` cannot be redirected; tests that rely on discovery or the
//!   built-in defaults check `search_locations_are_hermetic()` and skip otherwise.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every override variable the binary can read, across all capabilities.
const OVERRIDE_VARS: &[&str] = &[
    "STRATUM_CORE_MODE",
    "STRATUM_CORE_WORK_POOL_SIZE",
    "STRATUM_POSTGRES_HOST",
    "STRATUM_POSTGRES_PORT",
    "STRATUM_POSTGRES_DB",
    "STRATUM_POSTGRES_USER",
    "STRATUM_POSTGRES_PASS",
    "STRATUM_POSTGRES_BATCH_COUNT",
    "STRATUM_KAFKA_BOOTSTRAP_SERVERS",
    "STRATUM_KAFKA_GROUP_ID",
    "STRATUM_KAFKA_AUTO_OFFSET_RESET",
    "STRATUM_KAFKA_TOPIC",
    "STRATUM_PROMETHEUS_PORT",
    "STRATUM_LOG_LEVEL",
    "STRATUM_ENDPOINTS_GRPC_ADDRESS",
    "STRATUM_ENDPOINTS_HTTP_ADDRESS",
    "STRATUM_ENDPOINTS_HTTP_USER",
    "STRATUM_ENDPOINTS_HTTP_PASS",
];

/// Returns a hermetic `stratum` command running inside `workdir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `HOME` and the working directory point at `workdir`, so only files the
///   test writes there can be discovered.
/// - `STRATUM_CONFIG_PATH`, `RUST_LOG` and every override variable are cleared.
pub fn stratum_cmd(workdir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("stratum");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("HOME", workdir);
    cmd.current_dir(workdir);

    // Clear potential host leakage
    cmd.env_remove("STRATUM_CONFIG_PATH").env_remove("RUST_LOG");
    for var in OVERRIDE_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// System-wide location searched before `HOME` and the working directory.
const SYSTEM_CONFIG_DIR: &str = "/etc/stratum";

/// Config file names the binary looks for in each search location.
const CONFIG_FILE_NAMES: &[&str] = &["config.yaml", "config.yml", "config"];

/// Whether the host has no system-wide config that would shadow the test's own.
///
/// Prints a skip note when a file is found, matching the live-test convention.
#[allow(dead_code)]
pub fn search_locations_are_hermetic() -> bool {
    let system = Path::new(SYSTEM_CONFIG_DIR);
    match CONFIG_FILE_NAMES
        .iter()
        .map(|name| system.join(name))
        .find(|path| path.exists())
    {
        Some(path) => {
            eprintln!("Skipping discovery-dependent test: {} exists.", path.display());
            false
        }
        None => true,
    }
}

/// Writes `content` to `<dir>/<name>` and returns the path.
#[allow(dead_code)]
pub fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write config");
    path
}
