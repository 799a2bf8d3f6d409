//! # matchX Store
//!
//! Flat-file I/O for the matchX recommendation pipeline.
//!
//! - [`load_datasets`] - one CSV per entity kind, headers mapped through
//!   schema aliases, strict UTF-8
//! - [`write_flat`] / [`write_per_user`] - pretty JSON output with stable
//!   ordering
//!
//! Structural problems (missing file, bad encoding) are fatal
//! [`StoreError`]s; row-level problems are logged and skipped.

pub mod error;
pub mod loader;
pub mod writer;

pub use error::{Result, StoreError};
pub use loader::{load_datasets, load_records, Datasets};
pub use writer::{flat_output_path, user_output_path, write_flat, write_per_user};
