//! # matchX
//!
//! A lightweight content-based recommendation pipeline.
//!
//! matchX loads tabular user and item records, builds TF-IDF profile
//! vectors over one shared vocabulary, scores every (user, item) pair by
//! cosine similarity plus small explainable boosts, falls back to a
//! popularity heuristic for cold-start users, and writes ranked JSON
//! output. An optional seeded feedback simulation perturbs the ranking
//! reproducibly.
//!
//! ## Quick Start
//!
//! ```bash
//! matchx --data-dir ./data --output-dir ./output
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use matchx::pipeline::{run, PipelineConfig};
//!
//! let config = PipelineConfig::default();
//! run(&config).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! matchX is composed of several crates:
//!
//! - [`matchx-core`](matchx_core) - tokenization, TF-IDF, sparse vectors
//! - [`matchx-schema`](matchx_schema) - column aliasing, record
//!   normalization, text profiles
//! - [`matchx-engine`](matchx_engine) - similarity scoring, boosts,
//!   cold-start fallback, feedback simulation
//! - [`matchx-store`](matchx_store) - CSV loading and JSON output

pub mod pipeline;

// Re-export core types
pub use matchx_core::{SparseVector, TfidfConfig, TfidfModel, Vocabulary};
pub use matchx_engine::{
    BoostConfig, Catalog, EngineError, FeedbackConfig, FeedbackSimulator, Recommendation,
    Recommender, UserRecommendations,
};
pub use matchx_schema::{document_text, EntityKind, EntitySchema, Record, SchemaError};
pub use matchx_store::{load_datasets, Datasets, StoreError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::pipeline::{run, FeedbackRun, PipelineConfig};
    pub use crate::{
        document_text, load_datasets, BoostConfig, Catalog, Datasets, EngineError, EntityKind,
        EntitySchema, FeedbackConfig, FeedbackSimulator, Record, Recommendation, Recommender,
        SchemaError, SparseVector, StoreError, TfidfConfig, TfidfModel, UserRecommendations,
        Vocabulary,
    };
}
