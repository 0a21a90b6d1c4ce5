//! Builder over tagged optional sections.
//!
//! Responsibilities:
//! - Collect unconditional sections and capability-tagged sections.
//! - Keep a tagged section only when its capability is enabled.
//!
//! Invariants:
//! - Section order in the built schema is insertion order.
//! - A section name appears at most once; adding it again is ignored.

use super::capability::Capabilities;
use super::sections::SectionSpec;
use super::Schema;

/// Builds a [`Schema`] for a fixed capability set.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    capabilities: Capabilities,
    sections: Vec<SectionSpec>,
}

impl SchemaBuilder {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            sections: Vec::new(),
        }
    }

    /// Add a section. Untagged sections are always kept; tagged sections are
    /// kept only if their capability is part of this builder's set.
    pub fn section(mut self, section: SectionSpec) -> Self {
        let enabled = match section.requires {
            None => true,
            Some(flag) => self.capabilities.contains(flag),
        };
        let duplicate = self.sections.iter().any(|s| s.name == section.name);
        if enabled && !duplicate {
            self.sections.push(section);
        }
        self
    }

    /// Add every section from a table.
    pub fn sections<'a>(self, sections: impl IntoIterator<Item = &'a SectionSpec>) -> Self {
        sections
            .into_iter()
            .fold(self, |builder, section| builder.section(*section))
    }

    pub fn build(self) -> Schema {
        Schema::from_parts(self.capabilities, self.sections)
    }
}
