//! Base document selection and parsing.
//!
//! Responsibilities:
//! - Choose exactly one base document: explicit path, first discovered file, or built-in default.
//! - Parse the chosen YAML document into a schema-restricted `ConfigDocument`.
//!
//! Does NOT handle:
//! - Environment overrides (see overlay.rs).
//! - Merging several documents; precedence is a strict chain, not a layered merge.
//!
//! Invariants:
//! - An explicit path that cannot be read fails with `SourceUnavailable`; nothing else is tried.
//! - A document that exists but cannot be parsed fails with `Parse`, whichever branch chose it.
//! - A file missing at a search location is not an error; the next location is tried.
//! - Within one location, extensioned files win over the bare `config` file.
//! - Keys not declared by the schema are ignored.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value as YamlValue};

use super::error::ConfigError;
use crate::constants::{
    CONFIG_FILE_EXTENSIONS, CONFIG_FILE_STEM, HOME_CONFIG_DIR, SYSTEM_CONFIG_DIR,
};
use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::types::{ConfigDocument, DocumentOrigin, Value};

/// Default document compiled into the binary.
pub const DEFAULT_DOCUMENT: &str = include_str!("../default_config.yaml");

/// Conventional search locations, in lookup order.
///
/// - `/etc/stratum`
/// - `$HOME/.stratum` (skipped when no home directory can be determined)
/// - the current working directory
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(SYSTEM_CONFIG_DIR)];
    match directories::BaseDirs::new() {
        Some(base) => dirs.push(base.home_dir().join(HOME_CONFIG_DIR)),
        None => tracing::debug!("No home directory found; skipping per-user config location"),
    }
    dirs.push(PathBuf::from("."));
    dirs
}

/// Picks the single document that supplies base values.
#[derive(Debug, Clone)]
pub struct SourceResolver {
    search_dirs: Vec<PathBuf>,
}

impl Default for SourceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceResolver {
    /// Resolver over the conventional search locations.
    pub fn new() -> Self {
        Self {
            search_dirs: default_search_dirs(),
        }
    }

    /// Override the search locations (primarily for testing).
    pub fn with_search_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs: dirs }
    }

    /// Select and parse the base document.
    pub fn resolve(
        &self,
        schema: &Schema,
        explicit: Option<&Path>,
    ) -> Result<ConfigDocument, ConfigError> {
        let (content, origin) = if let Some(path) = explicit {
            (read_file(path)?, DocumentOrigin::Explicit(path.to_path_buf()))
        } else if let Some(path) = self.discover() {
            (read_file(&path)?, DocumentOrigin::Discovered(path))
        } else {
            (DEFAULT_DOCUMENT.to_string(), DocumentOrigin::BuiltIn)
        };

        let document = parse_document(schema, &content, origin)?;
        tracing::info!(
            origin = %document.origin(),
            keys = document.len(),
            "Configuration source selected"
        );
        Ok(document)
    }

    /// First existing config file across the search locations.
    ///
    /// Each location is checked for `config.yaml`, `config.yml`, then a bare
    /// `config`, which is read as YAML like the others.
    pub fn discover(&self) -> Option<PathBuf> {
        for dir in &self.search_dirs {
            let candidates = CONFIG_FILE_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
                .chain(std::iter::once(dir.join(CONFIG_FILE_STEM)));
            for candidate in candidates {
                if candidate.is_file() {
                    return Some(candidate);
                }
                tracing::trace!(path = %candidate.display(), "No config file at search location");
            }
        }
        None
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Config file could not be read");
        ConfigError::SourceUnavailable {
            path: path.to_path_buf(),
            kind: e.kind(),
        }
    })
}

/// Parse YAML content into a document restricted to the schema's keys.
///
/// An empty document yields an empty mapping; every key is then left to the
/// overlay or to its zero value.
pub fn parse_document(
    schema: &Schema,
    content: &str,
    origin: DocumentOrigin,
) -> Result<ConfigDocument, ConfigError> {
    let root: YamlValue = if is_blank_document(content) {
        YamlValue::Null
    } else {
        serde_yaml::from_str(content).map_err(|e| ConfigError::parse(&origin, e.to_string()))?
    };

    let mut leaves = Vec::new();
    match &root {
        YamlValue::Null => {}
        YamlValue::Mapping(map) => collect_leaves(schema, "", map, &mut leaves, &origin)?,
        other => {
            return Err(ConfigError::parse(
                &origin,
                format!("document root must be a mapping, found {}", describe(other)),
            ));
        }
    }

    let mut document = ConfigDocument::new(origin);
    for (key, raw) in leaves {
        match schema.field(&key) {
            Some(field) => {
                if let Some(value) = coerce(field, raw, document.origin())? {
                    document.insert(field, value);
                }
            }
            None => tracing::trace!(key = %key, "Ignoring key not declared by the schema"),
        }
    }
    Ok(document)
}

/// Flatten nested mappings into dotted keys. Mappings sitting on a declared
/// field are kept as leaves so `coerce` can reject them.
fn collect_leaves<'a>(
    schema: &Schema,
    prefix: &str,
    map: &'a Mapping,
    out: &mut Vec<(String, &'a YamlValue)>,
    origin: &DocumentOrigin,
) -> Result<(), ConfigError> {
    for (key, value) in map {
        let segment = match key {
            YamlValue::String(s) => s.to_lowercase(),
            YamlValue::Number(n) => n.to_string(),
            YamlValue::Bool(b) => b.to_string(),
            other => {
                return Err(ConfigError::parse(
                    origin,
                    format!("unsupported key type {} under '{prefix}'", describe(other)),
                ));
            }
        };
        let path = if prefix.is_empty() {
            segment
        } else {
            format!("{prefix}.{segment}")
        };

        match value {
            YamlValue::Mapping(inner) if schema.field(&path).is_none() => {
                collect_leaves(schema, &path, inner, out, origin)?;
            }
            _ => out.push((path, value)),
        }
    }
    Ok(())
}

/// Convert a YAML leaf to the field's declared type. `null` means absent.
fn coerce(
    field: &FieldSpec,
    raw: &YamlValue,
    origin: &DocumentOrigin,
) -> Result<Option<Value>, ConfigError> {
    let mismatch = || {
        ConfigError::parse(
            origin,
            format!(
                "{}: expected {}, found {}",
                field.key,
                field.kind.as_str(),
                describe(raw)
            ),
        )
    };

    let value = match (field.kind, raw) {
        (_, YamlValue::Null) => return Ok(None),
        (FieldKind::Integer, YamlValue::Number(n)) => {
            Value::Integer(n.as_i64().ok_or_else(mismatch)?)
        }
        (FieldKind::Integer, YamlValue::String(s)) => {
            Value::Integer(s.trim().parse::<i64>().map_err(|_| mismatch())?)
        }
        (FieldKind::String, YamlValue::String(s)) => Value::String(s.clone()),
        (FieldKind::String, YamlValue::Number(n)) => Value::String(n.to_string()),
        (FieldKind::String, YamlValue::Bool(b)) => Value::String(b.to_string()),
        _ => return Err(mismatch()),
    };
    Ok(Some(value))
}

/// True when the content holds nothing but blank lines and comments.
fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn describe(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "a boolean",
        YamlValue::Number(_) => "a number",
        YamlValue::String(_) => "a string",
        YamlValue::Sequence(_) => "a sequence",
        YamlValue::Mapping(_) => "a mapping",
        YamlValue::Tagged(_) => "a tagged value",
    }
}
