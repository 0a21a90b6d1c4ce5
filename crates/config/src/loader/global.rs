//! Process-wide configuration snapshot.
//!
//! Responsibilities:
//! - Run compose → resolve source → overlay exactly once per process.
//! - Hand every caller the same `ResolvedConfig`, or the same error.
//!
//! Does NOT handle:
//! - Recovering from a failed resolution; the failure is cached and the caller is
//!   expected to stop the process.
//!
//! Invariants:
//! - Concurrent first callers block until the single resolution finishes.
//! - A published snapshot is never replaced or mutated.
//! - Calling `initialize` after the snapshot exists returns the existing snapshot;
//!   the new path is ignored.

use std::path::Path;
use std::sync::OnceLock;

use super::error::ConfigError;
use super::overlay::merge_from_env;
use super::source::SourceResolver;
use crate::schema::Schema;
use crate::types::ResolvedConfig;

/// A once-initialized slot holding the outcome of a configuration resolution.
#[derive(Debug, Default)]
pub struct ConfigCell {
    slot: OnceLock<Result<ResolvedConfig, ConfigError>>,
}

impl ConfigCell {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Return the stored outcome, running `resolve` first if nothing is stored yet.
    ///
    /// Exactly one caller runs `resolve`; everyone else waits for it.
    pub fn get_or_resolve<F>(&self, resolve: F) -> Result<&ResolvedConfig, ConfigError>
    where
        F: FnOnce() -> Result<ResolvedConfig, ConfigError>,
    {
        self.slot.get_or_init(resolve).as_ref().map_err(Clone::clone)
    }

    /// Return the stored outcome without resolving.
    pub fn peek(&self) -> Option<Result<&ResolvedConfig, ConfigError>> {
        self.slot
            .get()
            .map(|outcome| outcome.as_ref().map_err(Clone::clone))
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}

/// Resolve a fresh snapshot for the compiled schema.
///
/// This does not touch the process-wide slot.
pub fn resolve(explicit: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
    resolve_with(&Schema::compiled(), &SourceResolver::new(), explicit)
}

/// Resolve a fresh snapshot for a given schema and resolver.
pub fn resolve_with(
    schema: &Schema,
    resolver: &SourceResolver,
    explicit: Option<&Path>,
) -> Result<ResolvedConfig, ConfigError> {
    let base = resolver.resolve(schema, explicit)?;
    merge_from_env(schema, &base)
}

static GLOBAL: ConfigCell = ConfigCell::new();

/// Resolve and publish the process-wide configuration.
///
/// Only the first call (from here or from [`try_get`]/[`get`]) performs the
/// resolution; later calls return the published snapshot or the cached error.
pub fn initialize(explicit: Option<&Path>) -> Result<&'static ResolvedConfig, ConfigError> {
    let mut resolved_here = false;
    let outcome = GLOBAL.get_or_resolve(|| {
        resolved_here = true;
        publish(resolve(explicit))
    });

    if !resolved_here && let Some(path) = explicit {
        tracing::warn!(
            path = %path.display(),
            "Configuration already initialized; ignoring explicit path"
        );
    }
    outcome
}

/// The process-wide configuration, resolving from the default locations on first use.
pub fn try_get() -> Result<&'static ResolvedConfig, ConfigError> {
    GLOBAL.get_or_resolve(|| publish(resolve(None)))
}

/// The process-wide configuration.
///
/// # Panics
///
/// Panics if the one-time resolution failed. Configuration is a startup
/// precondition; call [`initialize`] during bootstrap to handle the error there.
pub fn get() -> &'static ResolvedConfig {
    match try_get() {
        Ok(config) => config,
        Err(e) => panic!("configuration could not be resolved: {e}"),
    }
}

fn publish(outcome: Result<ResolvedConfig, ConfigError>) -> Result<ResolvedConfig, ConfigError> {
    match &outcome {
        Ok(config) => tracing::info!(
            origin = %config.origin(),
            capabilities = %config.capabilities(),
            "Configuration published"
        ),
        Err(e) => tracing::error!(error = %e, "Configuration resolution failed"),
    }
    outcome
}
