//! Environment overlay.
//!
//! Responsibilities:
//! - Compute the final value of every schema field from the environment and the base document.
//! - Build the typed `ResolvedConfig` from the merged values.
//!
//! Does NOT handle:
//! - Choosing the base document (see source.rs).
//! - Publishing the snapshot (see global.rs).
//!
//! Invariants:
//! - Precedence per field: environment, then base document, then the zero value.
//! - Only an empty environment value is treated as unset; values are never trimmed.
//! - String values are used verbatim; integer values must parse exactly as given.
//! - A non-integer environment value for an integer field is an error, never a fallback.
//! - Every schema key is present in the merged document.
//! - Values of secret fields are never logged.

use super::env::env_var_verbatim;
use super::error::ConfigError;
use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::types::{ConfigDocument, ResolvedConfig, Value};

/// Merge environment overrides from `env` over `base`.
///
/// `env` maps an override key (e.g. `STRATUM_CORE_MODE`) to its raw value.
pub fn merge<F>(schema: &Schema, base: &ConfigDocument, env: F) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut merged = ConfigDocument::new(base.origin().clone());

    for field in schema.fields() {
        let var = Schema::env_key(field);
        let value = match env(&var).filter(|raw| !raw.is_empty()) {
            Some(raw) => {
                let value = parse_override(field, &var, raw)?;
                tracing::debug!(key = field.key, var = %var, "Environment override applied");
                value
            }
            None => match base.get(field.key) {
                Some(value) => value.clone(),
                None => {
                    tracing::trace!(key = field.key, "No value in base document, using zero value");
                    field.kind.zero_value()
                }
            },
        };
        merged.insert(field, value);
    }

    Ok(ResolvedConfig::from_document(schema, merged))
}

/// Merge overrides from the process environment over `base`.
pub fn merge_from_env(schema: &Schema, base: &ConfigDocument) -> Result<ResolvedConfig, ConfigError> {
    merge(schema, base, env_var_verbatim)
}

fn parse_override(field: &FieldSpec, var: &str, raw: String) -> Result<Value, ConfigError> {
    match field.kind {
        FieldKind::String => Ok(Value::String(raw)),
        FieldKind::Integer => raw.parse::<i64>().map(Value::Integer).map_err(|_| {
            ConfigError::OverlayType {
                var: var.to_string(),
                message: format!("must be an integer (got '{raw}')"),
            }
        }),
    }
}
