//! Configuration type definitions for Stratum.
//!
//! Responsibilities:
//! - Define leaf values, flat documents and the typed snapshot.
//!
//! Does NOT handle:
//! - Loading documents or applying environment overrides (see `loader` module).
//! - Deciding which sections exist (see `schema` module).
//!
//! Invariants:
//! - All credential values use `secrecy::SecretString` in the typed snapshot.

mod document;
mod resolved;
mod value;

pub use document::{ConfigDocument, DocumentOrigin};
pub use resolved::{
    CoreSection, EndpointsSection, GrpcSection, HttpSection, KafkaSection, LogSection,
    PostgresSection, PrometheusSection, ResolvedConfig,
};
pub use value::Value;
