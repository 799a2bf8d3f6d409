//! Popularity heuristic for cold-start users
//!
//! With no interaction logs, popularity is derived from item attributes
//! alone: tag count plus description length. Raw scores are min-max
//! normalized across the catalog so they land in [0, 1]; when every item
//! scores the same the raw values are kept as-is (the ordering is flat
//! either way). The resulting score is identical for every cold-start
//! user evaluating the item.

use matchx_schema::Record;
use std::collections::HashMap;

/// Per-catalog popularity scores keyed by item id
#[derive(Debug, Clone, Default)]
pub struct PopularityIndex {
    scores: HashMap<String, f32>,
}

impl PopularityIndex {
    /// Compute popularity for one catalog.
    pub fn compute(items: &[Record]) -> Self {
        let mut scores: HashMap<String, f32> = HashMap::with_capacity(items.len());
        for item in items {
            scores.insert(item.id().to_string(), raw_popularity(item));
        }

        let min = scores.values().copied().fold(f32::INFINITY, f32::min);
        let max = scores.values().copied().fold(f32::NEG_INFINITY, f32::max);
        if max > min {
            for value in scores.values_mut() {
                *value = (*value - min) / (max - min);
            }
        }

        Self { scores }
    }

    /// Popularity score for an item; 0.0 for an unknown id
    #[inline]
    pub fn score(&self, item_id: &str) -> f32 {
        self.scores.get(item_id).copied().unwrap_or(0.0)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn raw_popularity(item: &Record) -> f32 {
    let tag_count = item
        .get("tags")
        .split(';')
        .filter(|t| !t.trim().is_empty())
        .count()
        .max(1);
    tag_count as f32 + description_of(item).chars().count() as f32 / 1000.0
}

// Posts carry their body in `content`; everything else uses `description`.
fn description_of(item: &Record) -> &str {
    let description = item.get("description");
    if description.is_empty() {
        item.get("content")
    } else {
        description
    }
}
