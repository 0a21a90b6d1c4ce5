//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failure modes.
//! - Map `ConfigError` variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-4 are fixed; scripts may depend on them.

use stratum_config::ConfigError;

/// Structured exit codes for `stratum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure, including `.env` problems.
    GeneralError = 1,

    /// The selected configuration file could not be read.
    ///
    /// Scripts should check the `--config` path or file permissions.
    SourceUnavailable = 2,

    /// The selected configuration document is malformed.
    ParseError = 3,

    /// An environment override has the wrong type for its field.
    OverlayTypeError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::SourceUnavailable { .. } => ExitCode::SourceUnavailable,
            ConfigError::Parse { .. } => ExitCode::ParseError,
            ConfigError::OverlayType { .. } => ExitCode::OverlayTypeError,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
