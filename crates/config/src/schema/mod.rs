//! Schema composition.
//!
//! Responsibilities:
//! - Compose the set of recognized sections from a capability set.
//! - Expose every field's dotted key and its environment override key.
//!
//! Does NOT handle:
//! - Reading documents or environment variables (see the `loader` module).
//!
//! Invariants:
//! - Composition is deterministic and total for every capability combination.
//! - The composed schema holds every unconditional section plus exactly one
//!   section per enabled capability.
//! - Override keys are `STRATUM_` + the dotted key with dots replaced by
//!   underscores, uppercased.

mod builder;
mod capability;
pub mod keys;
pub mod sections;

pub use builder::SchemaBuilder;
pub use capability::Capabilities;
pub use sections::{FieldKind, FieldSpec, SectionSpec};

use crate::constants::ENV_PREFIX;
use sections::ALL_SECTIONS;

/// The composed set of sections for one capability set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    capabilities: Capabilities,
    sections: Vec<SectionSpec>,
}

impl Schema {
    /// Compose the schema for the given capability set.
    pub fn compose(capabilities: Capabilities) -> Self {
        SchemaBuilder::new(capabilities)
            .sections(ALL_SECTIONS)
            .build()
    }

    /// Compose the schema for the capabilities compiled into this binary.
    pub fn compiled() -> Self {
        Self::compose(Capabilities::compiled())
    }

    pub(crate) fn from_parts(capabilities: Capabilities, sections: Vec<SectionSpec>) -> Self {
        Self {
            capabilities,
            sections,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name == name)
    }

    /// Every field of every composed section, in document order.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Look up a field by its dotted key.
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|f| f.key == key)
    }

    /// Environment override key for a field.
    pub fn env_key(field: &FieldSpec) -> String {
        env_key_for(field.key)
    }

    /// `(dotted key, override key)` pairs for every field.
    pub fn env_keys(&self) -> Vec<(&'static str, String)> {
        self.fields().map(|f| (f.key, Self::env_key(f))).collect()
    }
}

/// Mangle a dotted key into its environment override key.
pub fn env_key_for(key: &str) -> String {
    format!("{}_{}", ENV_PREFIX, key.replace('.', "_").to_uppercase())
}
