//! Layered service configuration for Stratum.
//!
//! This crate composes a configuration schema from the capabilities compiled
//! into the binary, selects one base document (explicit file, discovered file,
//! or built-in default), overlays `STRATUM_*` environment variables, and
//! publishes the result as a process-wide immutable snapshot.

pub mod constants;
mod loader;
pub mod schema;
pub mod types;

pub use loader::{
    ConfigCell, ConfigError, DEFAULT_DOCUMENT, SourceResolver, default_search_dirs,
    dotenv_disabled, env_var_or_none, env_var_verbatim, get, initialize, load_dotenv, merge,
    merge_from_env, parse_document, resolve, resolve_with, try_get,
};
pub use schema::{Capabilities, FieldKind, FieldSpec, Schema, SchemaBuilder, SectionSpec};
pub use types::{
    ConfigDocument, CoreSection, DocumentOrigin, EndpointsSection, GrpcSection, HttpSection,
    KafkaSection, LogSection, PostgresSection, PrometheusSection, ResolvedConfig, Value,
};
