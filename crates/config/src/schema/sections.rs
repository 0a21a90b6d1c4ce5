//! Section and field specifications.
//!
//! Responsibilities:
//! - Describe each configuration section as a static table of typed fields.
//! - Tag optional sections with the capability that enables them.
//!
//! Does NOT handle:
//! - Choosing which sections end up in a schema (see `builder.rs`).
//! - Reading values for the fields (see the `loader` module).
//!
//! Invariants:
//! - Every field key starts with its section name followed by a dot.
//! - Unconditional sections have `requires == None`.

use super::capability::Capabilities;
use super::keys;
use crate::types::Value;

/// Declared type of a leaf field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
        }
    }

    /// Value a field of this kind takes when no source provides one.
    pub fn zero_value(self) -> Value {
        match self {
            FieldKind::String => Value::String(String::new()),
            FieldKind::Integer => Value::Integer(0),
        }
    }
}

/// A single typed leaf of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Dotted key path, e.g. `endpoints.http.address`.
    pub key: &'static str,
    pub kind: FieldKind,
    /// Credential fields are never logged and are redacted when rendered.
    pub secret: bool,
}

impl FieldSpec {
    pub const fn string(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::String,
            secret: false,
        }
    }

    pub const fn integer(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Integer,
            secret: false,
        }
    }

    pub const fn secret(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::String,
            secret: true,
        }
    }

    /// Last segment of the dotted key.
    pub fn name(&self) -> &'static str {
        self.key.rsplit('.').next().unwrap_or(self.key)
    }
}

/// A named group of fields, optionally gated on a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Dotted section path, e.g. `core` or `endpoints.http`.
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    /// Capability that must be enabled for this section to be composed in.
    pub requires: Option<Capabilities>,
}

impl SectionSpec {
    pub fn is_optional(&self) -> bool {
        self.requires.is_some()
    }
}

pub const CORE: SectionSpec = SectionSpec {
    name: "core",
    fields: &[
        FieldSpec::string(keys::CORE_MODE),
        FieldSpec::integer(keys::CORE_WORK_POOL_SIZE),
    ],
    requires: None,
};

pub const POSTGRES: SectionSpec = SectionSpec {
    name: "postgres",
    fields: &[
        FieldSpec::string(keys::POSTGRES_HOST),
        FieldSpec::integer(keys::POSTGRES_PORT),
        FieldSpec::string(keys::POSTGRES_DB),
        FieldSpec::string(keys::POSTGRES_USER),
        FieldSpec::secret(keys::POSTGRES_PASS),
        FieldSpec::integer(keys::POSTGRES_BATCH_COUNT),
    ],
    requires: Some(Capabilities::RELATIONAL_STORE),
};

pub const KAFKA: SectionSpec = SectionSpec {
    name: "kafka",
    fields: &[
        FieldSpec::string(keys::KAFKA_BOOTSTRAP_SERVERS),
        FieldSpec::string(keys::KAFKA_GROUP_ID),
        FieldSpec::string(keys::KAFKA_AUTO_OFFSET_RESET),
        FieldSpec::string(keys::KAFKA_TOPIC),
    ],
    requires: Some(Capabilities::EVENT_STREAM),
};

pub const PROMETHEUS: SectionSpec = SectionSpec {
    name: "prometheus",
    fields: &[FieldSpec::integer(keys::PROMETHEUS_PORT)],
    requires: None,
};

pub const LOG: SectionSpec = SectionSpec {
    name: "log",
    fields: &[FieldSpec::string(keys::LOG_LEVEL)],
    requires: None,
};

pub const GRPC: SectionSpec = SectionSpec {
    name: "endpoints.grpc",
    fields: &[FieldSpec::string(keys::GRPC_ADDRESS)],
    requires: Some(Capabilities::RPC_ENDPOINT),
};

pub const HTTP: SectionSpec = SectionSpec {
    name: "endpoints.http",
    fields: &[
        FieldSpec::string(keys::HTTP_ADDRESS),
        FieldSpec::string(keys::HTTP_USER),
        FieldSpec::secret(keys::HTTP_PASS),
    ],
    requires: None,
};

/// Every known section, in document order.
pub const ALL_SECTIONS: &[SectionSpec] = &[CORE, POSTGRES, KAFKA, PROMETHEUS, LOG, GRPC, HTTP];
