//! Process environment access.
//!
//! Responsibilities:
//! - Read schema override values exactly as set.
//! - Read the tool's own settings with empty/whitespace filtering.
//! - Load a `.env` file into the process environment, gated by `DOTENV_DISABLED`.
//!
//! Does NOT handle:
//! - Mapping variables onto schema fields (see overlay.rs).
//!
//! Invariants:
//! - `env_var_verbatim` never trims; only an empty value is unset.
//! - `env_var_or_none` treats empty or whitespace-only values as unset and trims the rest.
//! - A missing `.env` file is not an error.

use super::error::ConfigError;
use crate::constants::DOTENV_DISABLED_VAR;

/// Read an environment variable as set, returning None only if unset, empty, or not
/// valid unicode. Leading and trailing whitespace are kept.
pub fn env_var_verbatim(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // Already trimmed; reuse the allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from a `.env` file in the current directory or
/// one of its parents.
///
/// Variables already present in the process environment win over `.env`
/// entries. If `DOTENV_DISABLED` is set to "true" or "1" nothing is loaded.
///
/// # Errors
///
/// Returns an error if:
/// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
/// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
///
/// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(e) if is_not_found(&e) => Ok(()),
        Err(e) => Err(ConfigError::from(e)),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
