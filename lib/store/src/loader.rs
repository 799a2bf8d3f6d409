//! CSV loading
//!
//! One CSV per entity kind in the data directory, headers mapped through
//! the schema's column aliases. Input must be UTF-8; anything else is a
//! fatal [`StoreError::Encoding`]. Row-level problems (unparseable rows,
//! blank ids) are logged and skipped, never fatal.

use crate::error::{Result, StoreError};
use matchx_schema::{EntityKind, EntitySchema, RawRecord, Record};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// All normalized datasets for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub users: Vec<Record>,
    pub events: Vec<Record>,
    pub jobs: Vec<Record>,
    pub posts: Vec<Record>,
}

impl Datasets {
    /// Items of one catalog kind; empty for `EntityKind::User`
    #[must_use]
    pub fn items(&self, kind: EntityKind) -> &[Record] {
        match kind {
            EntityKind::User => &[],
            EntityKind::Event => &self.events,
            EntityKind::Job => &self.jobs,
            EntityKind::Post => &self.posts,
        }
    }
}

/// Load every dataset (`users.csv`, `events.csv`, `jobs.csv`, `posts.csv`).
pub fn load_datasets(data_dir: &Path) -> Result<Datasets> {
    let mut datasets = Datasets::default();
    for kind in [
        EntityKind::User,
        EntityKind::Event,
        EntityKind::Job,
        EntityKind::Post,
    ] {
        let schema = EntitySchema::builtin(kind)?;
        let path = data_dir.join(format!("{}.csv", kind.file_stem()));
        let records = load_records(&path, &schema)?;
        match kind {
            EntityKind::User => datasets.users = records,
            EntityKind::Event => datasets.events = records,
            EntityKind::Job => datasets.jobs = records,
            EntityKind::Post => datasets.posts = records,
        }
    }
    Ok(datasets)
}

/// Load and normalize one CSV file against an entity schema.
pub fn load_records(path: &Path, schema: &EntitySchema) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(StoreError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| StoreError::Encoding {
        path: path.to_path_buf(),
        detail: e.utf8_error().to_string(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| StoreError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(path = %path.display(), line, "skipping unparseable row: {e}");
                continue;
            }
        };

        let raw: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();

        match schema.normalize(&raw) {
            Some(record) => records.push(record),
            None => warn!(path = %path.display(), line, "skipping row with blank id"),
        }
    }

    info!(
        "loaded {} {} records from {}",
        records.len(),
        schema.kind(),
        path.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_load_with_aliased_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "users.csv",
            b"user_id,degree_program,exams_subjects,city\nu1,CS,hiking;music,Austin\n",
        );
        let schema = EntitySchema::builtin(EntityKind::User).unwrap();
        let records = load_records(&path, &schema).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("degree"), "CS");
        assert_eq!(records[0].get("interests"), "hiking;music");
    }

    #[test]
    fn test_blank_id_rows_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "events.csv",
            b"event_id,title\ne1,Jazz Night\n,Missing Id\ne2,Hiking\n",
        );
        let schema = EntitySchema::builtin(EntityKind::Event).unwrap();
        let records = load_records(&path, &schema).unwrap();
        let ids: Vec<_> = records.iter().map(Record::id).collect();
        assert_eq!(ids, vec!["e1", "e2"]);
    }

    #[test]
    fn test_non_utf8_input_fails_with_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        // cp1252 "café" - 0xE9 is not valid UTF-8
        let path = write_file(dir.path(), "posts.csv", b"post_id,title\np1,caf\xE9\n");
        let schema = EntitySchema::builtin(EntityKind::Post).unwrap();
        let err = load_records(&path, &schema).unwrap_err();
        assert!(matches!(err, StoreError::Encoding { .. }), "{err}");
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let schema = EntitySchema::builtin(EntityKind::Job).unwrap();
        let err = load_records(&dir.path().join("jobs.csv"), &schema).unwrap_err();
        assert!(matches!(err, StoreError::MissingFile { .. }), "{err}");
    }

    #[test]
    fn test_load_datasets_reads_all_four() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "users.csv", b"user_id,city\nu1,Austin\n");
        write_file(dir.path(), "events.csv", b"event_id,title\ne1,Jazz\n");
        write_file(dir.path(), "jobs.csv", b"job_id,title\nj1,Analyst\n");
        write_file(dir.path(), "posts.csv", b"post_id,title\np1,Hello\n");

        let datasets = load_datasets(dir.path()).unwrap();
        assert_eq!(datasets.users.len(), 1);
        assert_eq!(datasets.items(EntityKind::Event).len(), 1);
        assert_eq!(datasets.items(EntityKind::Job).len(), 1);
        assert_eq!(datasets.items(EntityKind::Post).len(), 1);
        assert!(datasets.items(EntityKind::User).is_empty());
    }

    #[test]
    fn test_short_rows_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "events.csv",
            b"event_id,title,city\ne1,Jazz Night\n",
        );
        let schema = EntitySchema::builtin(EntityKind::Event).unwrap();
        let records = load_records(&path, &schema).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("city"), "");
    }
}
