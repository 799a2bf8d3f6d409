use matchx_schema::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Input file is not valid UTF-8. Fatal: silently transcoding would
    /// corrupt profile text.
    #[error("{}: not valid UTF-8: {detail}", .path.display())]
    Encoding { path: PathBuf, detail: String },

    #[error("expected data file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to parse {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
