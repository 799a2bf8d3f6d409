//! Recommendation output types
//!
//! A [`Recommendation`] carries the score plus the ordered reason strings
//! that explain it: the base signal first (text similarity or popularity
//! fallback), then any boosts, then feedback adjustments.

use matchx_schema::EntityKind;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Base score came from profile text similarity
pub const REASON_SIMILARITY: &str = "text similarity";
/// Base score came from the cold-start popularity heuristic
pub const REASON_POPULARITY: &str = "popularity fallback";
/// City boost applied
pub const REASON_CITY: &str = "city match";
/// Category boost applied
pub const REASON_CATEGORY: &str = "category overlap";
/// Tag boost applied
pub const REASON_TAG: &str = "tag overlap";
/// Simulated positive feedback applied
pub const REASON_LIKED: &str = "feedback: liked";
/// Simulated negative feedback applied
pub const REASON_DISLIKED: &str = "feedback: disliked";

/// One ranked (user, item) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user_id: String,
    pub item_id: String,
    pub item_type: EntityKind,
    pub score: f32,
    pub reasons: Vec<String>,
}

/// Per-user recommendations grouped by item kind, in the fixed output order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsByKind {
    pub events: Vec<Recommendation>,
    pub jobs: Vec<Recommendation>,
    pub posts: Vec<Recommendation>,
}

impl RecommendationsByKind {
    /// Mutable list for an item kind. Users are not an item catalog.
    pub fn slot_mut(&mut self, kind: EntityKind) -> &mut Vec<Recommendation> {
        match kind {
            EntityKind::Event => &mut self.events,
            EntityKind::Job => &mut self.jobs,
            EntityKind::Post => &mut self.posts,
            EntityKind::User => unreachable!("users are not an item catalog"),
        }
    }

    pub fn slot(&self, kind: EntityKind) -> &[Recommendation] {
        match kind {
            EntityKind::Event => &self.events,
            EntityKind::Job => &self.jobs,
            EntityKind::Post => &self.posts,
            EntityKind::User => &[],
        }
    }
}

/// The per-user aggregation written to `user_recommendations.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecommendations {
    pub user_id: String,
    pub recommendations: RecommendationsByKind,
}

/// Sort descending by score with ties broken by item id ascending,
/// the ordering rule used everywhere ranked output is produced.
pub fn rank(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| {
        OrderedFloat(b.score)
            .cmp(&OrderedFloat(a.score))
            .then_with(|| a.item_id.cmp(&b.item_id))
    });
}
