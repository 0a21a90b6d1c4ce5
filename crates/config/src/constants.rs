//! Centralized constants for the Stratum workspace.
//!
//! This module contains the environment prefix and the file-discovery values used
//! across crates to avoid duplicating them.

// =============================================================================
// Project Identity
// =============================================================================

/// Prefix of every environment override key (`STRATUM_CORE_MODE`, ...).
pub const ENV_PREFIX: &str = "STRATUM";

// =============================================================================
// Document Discovery
// =============================================================================

/// File stem searched for in each conventional location.
pub const CONFIG_FILE_STEM: &str = "config";

/// Supported document extensions, in lookup order. The bare stem is tried after these.
pub const CONFIG_FILE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// System-wide configuration directory.
pub const SYSTEM_CONFIG_DIR: &str = "/etc/stratum";

/// Directory under the user's home that holds a per-user configuration.
pub const HOME_CONFIG_DIR: &str = ".stratum";

// =============================================================================
// Environment Gates
// =============================================================================

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Placeholder printed instead of secret values.
pub const REDACTED: &str = "********";
