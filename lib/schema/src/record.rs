//! Record normalization
//!
//! Maps a raw tabular row onto the canonical fields of an [`EntitySchema`]
//! using first-match alias lookup. Missing or unrecognized source columns
//! degrade to empty strings; only a blank id drops the row.

use crate::schema::{EntityKind, EntitySchema};
use std::collections::HashMap;

/// A raw row as read from a source table: column name -> cell value
pub type RawRecord = HashMap<String, String>;

/// A normalized entity record with exactly the canonical fields populated
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    kind: EntityKind,
    values: HashMap<String, String>,
}

impl Record {
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Canonical field value; empty string for anything unknown or unset
    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }
}

impl EntitySchema {
    /// Normalize a raw row onto this schema's canonical fields.
    ///
    /// Returns `None` when the id resolves to a blank value; every other
    /// missing column becomes an empty string.
    pub fn normalize(&self, raw: &RawRecord) -> Option<Record> {
        let mut values = HashMap::with_capacity(self.fields().len());
        for field in self.fields() {
            let value = std::iter::once(field.name.as_str())
                .chain(field.aliases.iter().map(String::as_str))
                .find_map(|column| raw.get(column))
                .cloned()
                .unwrap_or_default();
            values.insert(field.name.clone(), value);
        }

        let id = values.get(self.id_field())?.trim().to_string();
        if id.is_empty() {
            return None;
        }

        Some(Record {
            id,
            kind: self.kind(),
            values,
        })
    }
}
