//! Text profile building
//!
//! Turns a normalized record into the single document string the vector
//! space is fitted on. A pure function of the record: identical field
//! values always produce identical documents.

use crate::record::Record;
use crate::schema::EntitySchema;

/// Concatenate the schema's profile fields in their declared order,
/// separated by single spaces. Empty fields contribute nothing.
#[must_use]
pub fn document_text(schema: &EntitySchema, record: &Record) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(schema.profile_fields().len());
    for field in schema.profile_fields() {
        let value = record.get(field);
        if !value.is_empty() {
            parts.push(value);
        }
    }
    parts.join(" ")
}
