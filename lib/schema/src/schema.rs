//! Entity schema definitions
//!
//! An [`EntitySchema`] maps heterogeneous source column names onto a
//! canonical per-entity field set and fixes the order in which text fields
//! are concatenated into a profile document. Schema shape errors are fatal;
//! data-dependent problems never are.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The four entity types the pipeline knows about.
/// Users are the recommendation targets; the other three are item catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Event,
    Job,
    Post,
}

impl EntityKind {
    /// The item catalogs, in the fixed pipeline order
    pub const ITEMS: [EntityKind; 3] = [EntityKind::Event, EntityKind::Job, EntityKind::Post];

    #[inline]
    #[must_use]
    pub fn is_item(self) -> bool {
        self != EntityKind::User
    }

    /// Singular name, as emitted in output documents
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Event => "event",
            EntityKind::Job => "job",
            EntityKind::Post => "post",
        }
    }

    /// Plural stem used for data and output file names ("events" -> events.csv)
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Event => "events",
            EntityKind::Job => "jobs",
            EntityKind::Post => "posts",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canonical field and the source column aliases it accepts.
/// Resolution tries the canonical name first, then each alias in order.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub aliases: Vec<String>,
}

impl FieldSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(name: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Schema for one entity kind
///
/// Holds the id field, the canonical fields with their accepted aliases,
/// and the subset of fields (in order) that form the text profile.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    kind: EntityKind,
    id_field: String,
    fields: Vec<FieldSpec>,
    profile_fields: Vec<String>,
}

impl EntitySchema {
    /// Create and validate a schema.
    ///
    /// Fails only on a malformed schema definition: no fields, an id field
    /// that is not declared, a column name claimed by two fields, or a
    /// profile field that is not declared.
    pub fn new(
        kind: EntityKind,
        id_field: &str,
        fields: Vec<FieldSpec>,
        profile_fields: &[&str],
    ) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::EmptySchema(kind));
        }

        if !fields.iter().any(|f| f.name == id_field) {
            return Err(SchemaError::MissingIdField {
                kind,
                field: id_field.to_string(),
            });
        }

        {
            let mut claimed: HashSet<&str> = HashSet::new();
            for field in &fields {
                for column in std::iter::once(field.name.as_str())
                    .chain(field.aliases.iter().map(String::as_str))
                {
                    if !claimed.insert(column) {
                        return Err(SchemaError::DuplicateAlias {
                            kind,
                            column: column.to_string(),
                        });
                    }
                }
            }
        }

        for profile_field in profile_fields {
            if !fields.iter().any(|f| f.name == *profile_field) {
                return Err(SchemaError::UnknownProfileField {
                    kind,
                    field: profile_field.to_string(),
                });
            }
        }

        Ok(Self {
            kind,
            id_field: id_field.to_string(),
            fields,
            profile_fields: profile_fields.iter().map(|f| f.to_string()).collect(),
        })
    }

    /// The built-in schema for an entity kind
    pub fn builtin(kind: EntityKind) -> Result<Self, SchemaError> {
        match kind {
            EntityKind::User => Self::new(
                kind,
                "user_id",
                vec![
                    FieldSpec::new("user_id"),
                    FieldSpec::new("university"),
                    FieldSpec::with_aliases("degree", &["degree_program"]),
                    FieldSpec::with_aliases("interests", &["exams_subjects"]),
                    FieldSpec::new("bio"),
                    FieldSpec::new("city"),
                ],
                &["university", "degree", "interests", "bio", "city"],
            ),
            EntityKind::Event => Self::new(
                kind,
                "event_id",
                vec![
                    FieldSpec::new("event_id"),
                    FieldSpec::new("title"),
                    FieldSpec::new("description"),
                    FieldSpec::new("category"),
                    FieldSpec::new("tags"),
                    FieldSpec::new("city"),
                ],
                &["title", "description", "city"],
            ),
            EntityKind::Job => Self::new(
                kind,
                "job_id",
                vec![
                    FieldSpec::new("job_id"),
                    FieldSpec::new("title"),
                    FieldSpec::new("description"),
                    FieldSpec::new("category"),
                    FieldSpec::new("tags"),
                    FieldSpec::new("city"),
                    FieldSpec::new("company"),
                ],
                &["title", "description", "company", "city"],
            ),
            EntityKind::Post => Self::new(
                kind,
                "post_id",
                vec![
                    FieldSpec::new("post_id"),
                    FieldSpec::new("title"),
                    FieldSpec::new("content"),
                    FieldSpec::new("category"),
                    FieldSpec::new("tags"),
                    FieldSpec::new("city"),
                ],
                &["title", "content", "city"],
            ),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Text fields in profile concatenation order
    #[must_use]
    pub fn profile_fields(&self) -> &[String] {
        &self.profile_fields
    }
}

/// Errors for a malformed schema definition. These abort the run;
/// problems in the data itself degrade to empty values instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("{0} schema has no fields")]
    EmptySchema(EntityKind),

    #[error("{kind} schema id field '{field}' is not declared")]
    MissingIdField { kind: EntityKind, field: String },

    #[error("{kind} schema claims column '{column}' twice")]
    DuplicateAlias { kind: EntityKind, column: String },

    #[error("{kind} schema profile field '{field}' is not declared")]
    UnknownProfileField { kind: EntityKind, field: String },
}
