//! # matchX Engine
//!
//! Scoring engine for the matchX recommendation pipeline.
//!
//! Scores every (user, item) pair over one shared TF-IDF vector space:
//!
//! 1. Base score: dot product of unit-norm vectors (cosine similarity).
//! 2. Explainable boosts on top: city match, category overlap, tag
//!    overlap, each with a fixed reason string.
//! 3. Cold-start fallback: a user with an all-zero vector is ranked by
//!    the catalog's popularity heuristic instead, boosts still applied.
//! 4. Deterministic ranking: descending score, ties by item id.
//!
//! An optional [`FeedbackSimulator`] pass nudges scores with seeded
//! synthetic like/dislike events.
//!
//! - [`Recommender`] / [`Catalog`] - scoring over fitted vectors
//! - [`Recommendation`] - (user, item, kind, score, reasons)
//! - [`BoostConfig`] / [`FeedbackConfig`] - heuristic constants
//! - [`EngineError`] - empty catalog / unknown user

pub mod boost;
pub mod error;
pub mod feedback;
pub mod popularity;
pub mod recommend;
pub mod scorer;

pub use boost::{BoostConfig, UserSignals};
pub use error::{EngineError, Result};
pub use feedback::{FeedbackConfig, FeedbackEvent, FeedbackSimulator, Polarity};
pub use popularity::PopularityIndex;
pub use recommend::{
    rank, Recommendation, RecommendationsByKind, UserRecommendations, REASON_CATEGORY,
    REASON_CITY, REASON_DISLIKED, REASON_LIKED, REASON_POPULARITY, REASON_SIMILARITY, REASON_TAG,
};
pub use scorer::{Catalog, Recommender};
