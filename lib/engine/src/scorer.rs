//! Recommender: scores every (user, item) pair for a requested item kind
//!
//! The base score is the dot product of two unit-norm TF-IDF vectors, so
//! it is cosine similarity and lies in [0, 1]. Boosts are added on top and
//! may push the combined score above 1; scores rank, they are not
//! probabilities. A user whose vector is all-zero is cold-start: the base
//! score is replaced by the catalog's popularity heuristic.

use crate::boost::{BoostConfig, UserSignals};
use crate::error::{EngineError, Result};
use crate::popularity::PopularityIndex;
use crate::recommend::{rank, Recommendation, REASON_POPULARITY, REASON_SIMILARITY};
use ahash::AHashMap;
use matchx_core::SparseVector;
use matchx_schema::{EntityKind, Record};

/// One item catalog with its fitted vectors and popularity scores
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Record>,
    vectors: Vec<SparseVector>,
    popularity: PopularityIndex,
}

impl Catalog {
    /// Build a catalog from normalized items and their fitted vectors,
    /// in matching order.
    #[must_use]
    pub fn new(items: Vec<Record>, vectors: Vec<SparseVector>) -> Self {
        assert_eq!(items.len(), vectors.len());
        let popularity = PopularityIndex::compute(&items);
        Self {
            items,
            vectors,
            popularity,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn popularity(&self) -> &PopularityIndex {
        &self.popularity
    }
}

/// Scores users against item catalogs over one shared vector space.
///
/// Owns the fitted vectors for the duration of a run; nothing here is
/// global state.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    users: Vec<Record>,
    user_vectors: Vec<SparseVector>,
    user_index: AHashMap<String, usize>,
    catalogs: AHashMap<EntityKind, Catalog>,
    boosts: BoostConfig,
}

impl Recommender {
    /// Create a recommender from normalized users and their fitted vectors,
    /// in matching order.
    #[must_use]
    pub fn new(users: Vec<Record>, user_vectors: Vec<SparseVector>, boosts: BoostConfig) -> Self {
        assert_eq!(users.len(), user_vectors.len());
        let user_index = users
            .iter()
            .enumerate()
            .map(|(i, u)| (u.id().to_string(), i))
            .collect();
        Self {
            users,
            user_vectors,
            user_index,
            catalogs: AHashMap::new(),
            boosts,
        }
    }

    /// Register the catalog for an item kind, replacing any previous one.
    pub fn insert_catalog(&mut self, kind: EntityKind, catalog: Catalog) {
        self.catalogs.insert(kind, catalog);
    }

    /// User ids in input order
    pub fn user_ids(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(|u| u.id())
    }

    /// Whether a user has no usable profile signal
    pub fn is_cold_start(&self, user_id: &str) -> Result<bool> {
        let index = self.user_position(user_id)?;
        Ok(self.user_vectors[index].is_zero())
    }

    /// Rank one item kind for one user and keep the top `top_n`.
    ///
    /// Ties are broken by item id ascending so output is reproducible.
    pub fn recommend(
        &self,
        user_id: &str,
        kind: EntityKind,
        top_n: usize,
    ) -> Result<Vec<Recommendation>> {
        let catalog = self
            .catalogs
            .get(&kind)
            .filter(|c| !c.is_empty())
            .ok_or(EngineError::EmptyCatalog(kind))?;

        let index = self.user_position(user_id)?;
        let user_vector = &self.user_vectors[index];
        let cold_start = user_vector.is_zero();
        let signals = UserSignals::from_record(&self.users[index]);

        let mut recommendations: Vec<Recommendation> = catalog
            .items
            .iter()
            .zip(catalog.vectors.iter())
            .map(|(item, item_vector)| {
                let (base, base_reason) = if cold_start {
                    (catalog.popularity.score(item.id()), REASON_POPULARITY)
                } else {
                    (user_vector.dot(item_vector), REASON_SIMILARITY)
                };

                let mut reasons = vec![base_reason.to_string()];
                let boost = self.boosts.apply(&signals, item, &mut reasons);

                Recommendation {
                    user_id: user_id.to_string(),
                    item_id: item.id().to_string(),
                    item_type: kind,
                    score: base + boost,
                    reasons,
                }
            })
            .collect();

        rank(&mut recommendations);
        recommendations.truncate(top_n);
        Ok(recommendations)
    }

    fn user_position(&self, user_id: &str) -> Result<usize> {
        self.user_index
            .get(user_id)
            .copied()
            .ok_or_else(|| EngineError::UnknownUser(user_id.to_string()))
    }
}
