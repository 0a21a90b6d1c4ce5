//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every configuration resolution failure.
//! - Provide conversion from `dotenvy` errors.
//!
//! Does NOT handle:
//! - Deciding whether a failure is fatal (every variant is; callers exit).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, origins).
//! - Errors are `Clone` so a cached failure can be handed to every caller.
//! - Errors NEVER include environment values of secret fields or raw `.env` lines.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::DocumentOrigin;

/// Errors that can occur during configuration resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration file was selected but could not be read.
    #[error("Failed to read config file at {}: {kind}", path.display())]
    SourceUnavailable { path: PathBuf, kind: ErrorKind },

    /// The selected document is malformed or holds a value of the wrong shape.
    #[error("Failed to parse config document ({origin}): {message}")]
    Parse {
        origin: DocumentOrigin,
        message: String,
    },

    /// An environment override cannot be converted to the field's type.
    #[error("Invalid value for {var}: {message}")]
    OverlayType { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    pub(crate) fn parse(origin: &DocumentOrigin, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            origin: origin.clone(),
            message: message.into(),
        }
    }
}

impl From<dotenvy::Error> for ConfigError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }
}
