//! # matchX Core
//!
//! Core library for the matchX recommendation pipeline.
//!
//! This crate provides the text vectorization building blocks:
//!
//! - [`tokenize`](tokenize::tokenize) - lowercase word tokenization with n-gram expansion
//! - [`Vocabulary`] - deterministic term-to-index mapping fitted over a corpus
//! - [`TfidfModel`] - TF-IDF weighting with L2-normalized sparse output
//! - [`SparseVector`] - sorted sparse vector with merge-walk dot products
//!
//! ## Example
//!
//! ```rust
//! use matchx_core::{TfidfConfig, TfidfModel};
//!
//! let docs = ["hiking music outdoor", "music festival downtown"];
//! let model = TfidfModel::fit(TfidfConfig::default(), docs.into_iter());
//!
//! let user = model.transform("hiking music");
//! let item = model.transform("music festival");
//!
//! // Both vectors are unit-norm, so the dot product is cosine similarity.
//! let score = user.dot(&item);
//! assert!(score > 0.0 && score <= 1.0);
//! ```

pub mod tfidf;
pub mod tokenize;
pub mod vector;
pub mod vocabulary;

pub use tfidf::{TfidfConfig, TfidfModel};
pub use vector::SparseVector;
pub use vocabulary::Vocabulary;
