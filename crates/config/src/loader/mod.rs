//! Configuration loader: source selection, environment overlay, process-wide publishing.
//!
//! Responsibilities:
//! - Pick one base document by strict precedence (explicit path, search locations, built-in default).
//! - Apply `STRATUM_*` environment overrides on top of the base document.
//! - Publish the resulting snapshot once per process.
//! - Load `.env` files behind the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Schema composition (see the `schema` module).
//! - Hot reload; a new configuration requires a new process.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over document values.
//! - Every failure is fatal to resolution; nothing is retried.

mod env;
mod error;
mod global;
mod overlay;
mod source;

#[cfg(test)]
mod tests;

pub use env::{dotenv_disabled, env_var_or_none, env_var_verbatim, load_dotenv};
pub use error::ConfigError;
pub use global::{ConfigCell, get, initialize, resolve, resolve_with, try_get};
pub use overlay::{merge, merge_from_env};
pub use source::{DEFAULT_DOCUMENT, SourceResolver, default_search_dirs, parse_document};
