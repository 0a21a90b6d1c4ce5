//! Flat configuration documents keyed by dotted path.
//!
//! Responsibilities:
//! - Hold schema-restricted values together with the source they came from.
//! - Render values as a nested tree, masking credential fields on request.
//!
//! Does NOT handle:
//! - Parsing documents (see `loader/source.rs`).
//! - Deciding which keys are allowed (the loader only inserts schema keys).
//!
//! Invariants:
//! - A key recorded as secret is never shown by `Debug` or by `redacted()`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use super::value::Value;
use crate::constants::REDACTED;
use crate::schema::FieldSpec;

/// Where a base document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// File given explicitly by the caller.
    Explicit(PathBuf),
    /// File found at one of the conventional search locations.
    Discovered(PathBuf),
    /// Embedded default document.
    BuiltIn,
}

impl DocumentOrigin {
    pub fn path(&self) -> Option<&Path> {
        match self {
            DocumentOrigin::Explicit(path) | DocumentOrigin::Discovered(path) => Some(path),
            DocumentOrigin::BuiltIn => None,
        }
    }
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentOrigin::Explicit(path) => write!(f, "explicit file {}", path.display()),
            DocumentOrigin::Discovered(path) => write!(f, "discovered file {}", path.display()),
            DocumentOrigin::BuiltIn => f.write_str("built-in defaults"),
        }
    }
}

/// Values for schema keys, keyed by dotted path.
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    origin: DocumentOrigin,
    values: BTreeMap<String, Value>,
    secrets: BTreeSet<&'static str>,
}

impl ConfigDocument {
    pub fn new(origin: DocumentOrigin) -> Self {
        Self {
            origin,
            values: BTreeMap::new(),
            secrets: BTreeSet::new(),
        }
    }

    pub fn origin(&self) -> &DocumentOrigin {
        &self.origin
    }

    /// Set the value of a schema field.
    pub fn insert(&mut self, field: &FieldSpec, value: Value) {
        if field.secret {
            self.secrets.insert(field.key);
        }
        self.values.insert(field.key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(dotted key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// String value of a key, or `""` when absent or not a string.
    pub fn string(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    /// Integer value of a key, or `0` when absent or not an integer.
    pub fn integer(&self, key: &str) -> i64 {
        self.get(key).and_then(Value::as_integer).unwrap_or_default()
    }

    pub fn is_secret(&self, key: &str) -> bool {
        self.secrets.contains(key)
    }

    /// Flat copy with credential values replaced by a placeholder.
    pub fn redacted(&self) -> BTreeMap<String, Value> {
        self.values
            .iter()
            .map(|(k, v)| {
                let shown = if self.is_secret(k) {
                    Value::from(REDACTED)
                } else {
                    v.clone()
                };
                (k.clone(), shown)
            })
            .collect()
    }

    /// Nested tree of the document, e.g. `{"core": {"mode": "release"}}`.
    ///
    /// Leaves are serialized from `Value`, so integers stay numbers and strings stay strings.
    pub fn to_tree(&self, redact: bool) -> Result<serde_json::Value, serde_json::Error> {
        let mut root = serde_json::Map::new();
        for (key, value) in &self.values {
            let leaf = if redact && self.is_secret(key) {
                serde_json::Value::from(REDACTED)
            } else {
                serde_json::to_value(value)?
            };
            insert_path(&mut root, key, leaf);
        }
        Ok(serde_json::Value::Object(root))
    }
}

fn insert_path(root: &mut serde_json::Map<String, serde_json::Value>, key: &str, leaf: serde_json::Value) {
    let mut segments = key.split('.').peekable();
    let mut node = root;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            node.insert(segment.to_string(), leaf);
            return;
        }
        let child = node
            .entry(segment.to_string())
            .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
        if !child.is_object() {
            *child = serde_json::Value::Object(serde_json::Map::new());
        }
        node = match child {
            serde_json::Value::Object(map) => map,
            _ => return,
        };
    }
}

impl fmt::Debug for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDocument")
            .field("origin", &self.origin)
            .field("values", &self.redacted())
            .finish()
    }
}
