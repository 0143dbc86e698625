//! Cross-language reconciliation of member shapes.
//!
//! Every language is recorded into one [`SchemaRegistry`]. A member must have
//! the same shape in every language that declares it; the first disagreement
//! fails the run instead of letting the last language win.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::core::data::{LanguageTable, MemberShape};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct SchemaRegistry {
    members: IndexMap<String, MemberShape>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the shape `language` declares for `name`.
    pub fn record(&mut self, name: &str, shape: MemberShape, language: &str) -> Result<()> {
        match self.members.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(shape);
                Ok(())
            }
            Entry::Occupied(slot) if *slot.get() == shape => Ok(()),
            Entry::Occupied(slot) => Err(Error::SchemaConflict {
                member: name.to_string(),
                existing: *slot.get(),
                incoming: shape,
                language: language.to_string(),
            }),
        }
    }

    /// Record every member of a parsed language table, in document order.
    pub fn record_table(&mut self, table: &LanguageTable) -> Result<()> {
        for (name, value) in &table.entries {
            self.record(name, value.shape(), &table.language)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Freeze the registry into the schema every artifact is emitted against.
    pub fn finalize(self) -> Schema {
        Schema {
            members: self.members.into_iter().collect(),
        }
    }
}

/// Finalized, read-only member layout in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    members: Vec<(String, MemberShape)>,
}

impl Schema {
    pub fn members(&self) -> &[(String, MemberShape)] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
