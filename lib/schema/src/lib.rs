//! # matchX Schema
//!
//! Entity schemas for the matchX recommendation pipeline.
//!
//! Source tables arrive with heterogeneous column names; this crate maps
//! them onto a canonical per-entity field set and builds the text profile
//! document each entity is vectorized from.
//!
//! - [`EntityKind`] - user, event, job, post
//! - [`EntitySchema`] - canonical fields with ordered column aliases
//! - [`Record`] - a normalized row ([`EntitySchema::normalize`])
//! - [`document_text`] - profile concatenation in schema order
//!
//! Data problems (missing columns, unknown columns) degrade to empty
//! values; only a malformed schema definition raises [`SchemaError`].

pub mod profile;
pub mod record;
pub mod schema;

pub use profile::document_text;
pub use record::{RawRecord, Record};
pub use schema::{EntityKind, EntitySchema, FieldSpec, SchemaError};
