//! Explainable score boosts
//!
//! Small additive adjustments tied to matching rules a user can be shown:
//! same city, overlapping category keywords, overlapping tags. Boosts are
//! independent; any subset can apply to the same pair. The constants are
//! configuration defaults, not algorithmic truths.

use crate::recommend::{REASON_CATEGORY, REASON_CITY, REASON_TAG};
use ahash::AHashSet;
use matchx_schema::Record;
use serde::{Deserialize, Serialize};

/// Additive boost constants
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoostConfig {
    /// Case-insensitive exact city match
    pub city: f32,
    /// Non-empty overlap between user interest tokens and item category tokens
    pub category: f32,
    /// Non-empty overlap between user interest tokens and item tags
    pub tag: f32,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            city: 0.10,
            category: 0.05,
            tag: 0.03,
        }
    }
}

/// A user's boost-relevant attributes, extracted once per user
#[derive(Debug, Clone)]
pub struct UserSignals {
    city: String,
    interests: AHashSet<String>,
}

impl UserSignals {
    pub fn from_record(user: &Record) -> Self {
        Self {
            city: user.get("city").trim().to_lowercase(),
            interests: interest_tokens(user.get("interests")),
        }
    }

    #[inline]
    #[must_use]
    pub fn has_interests(&self) -> bool {
        !self.interests.is_empty()
    }
}

impl BoostConfig {
    /// Apply all matching boosts for one (user, item) pair.
    ///
    /// Returns the boost total and pushes the reason strings in the fixed
    /// order: city, category, tag.
    pub fn apply(&self, user: &UserSignals, item: &Record, reasons: &mut Vec<String>) -> f32 {
        let mut boost = 0.0f32;

        if !user.city.is_empty() && user.city == item.get("city").trim().to_lowercase() {
            boost += self.city;
            reasons.push(REASON_CITY.to_string());
        }

        if intersects(&user.interests, &category_tokens(item.get("category"))) {
            boost += self.category;
            reasons.push(REASON_CATEGORY.to_string());
        }

        if intersects(&user.interests, &tag_tokens(item.get("tags"))) {
            boost += self.tag;
            reasons.push(REASON_TAG.to_string());
        }

        boost
    }
}

fn intersects(a: &AHashSet<String>, b: &AHashSet<String>) -> bool {
    !a.is_empty() && a.intersection(b).next().is_some()
}

/// Interests arrive as free-form lists ("hiking, music; chess club"):
/// split on commas, semicolons and whitespace.
fn interest_tokens(interests: &str) -> AHashSet<String> {
    interests
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Category cells hold one or a few keywords; split on whitespace.
fn category_tokens(category: &str) -> AHashSet<String> {
    category
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Tags are semicolon- or comma-delimited lists.
fn tag_tokens(tags: &str) -> AHashSet<String> {
    tags.split([';', ','])
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchx_schema::{EntityKind, EntitySchema, RawRecord};

    fn user(city: &str, interests: &str) -> UserSignals {
        let schema = EntitySchema::builtin(EntityKind::User).unwrap();
        let raw: RawRecord = [
            ("user_id".to_string(), "u1".to_string()),
            ("city".to_string(), city.to_string()),
            ("interests".to_string(), interests.to_string()),
        ]
        .into_iter()
        .collect();
        UserSignals::from_record(&schema.normalize(&raw).unwrap())
    }

    fn event(city: &str, category: &str, tags: &str) -> Record {
        let schema = EntitySchema::builtin(EntityKind::Event).unwrap();
        let raw: RawRecord = [
            ("event_id".to_string(), "e1".to_string()),
            ("city".to_string(), city.to_string()),
            ("category".to_string(), category.to_string()),
            ("tags".to_string(), tags.to_string()),
        ]
        .into_iter()
        .collect();
        schema.normalize(&raw).unwrap()
    }

    #[test]
    fn test_city_match_is_case_insensitive() {
        let config = BoostConfig::default();
        let mut reasons = Vec::new();
        let boost = config.apply(&user("AUSTIN", ""), &event("austin", "", ""), &mut reasons);
        assert!((boost - 0.10).abs() < 1e-6);
        assert_eq!(reasons, vec![REASON_CITY]);
    }

    #[test]
    fn test_empty_cities_never_match() {
        let config = BoostConfig::default();
        let mut reasons = Vec::new();
        let boost = config.apply(&user("", "music"), &event("", "", ""), &mut reasons);
        assert_eq!(boost, 0.0);
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_category_overlap() {
        let config = BoostConfig::default();
        let mut reasons = Vec::new();
        let boost = config.apply(
            &user("Denver", "hiking,music"),
            &event("Austin", "music", ""),
            &mut reasons,
        );
        assert!((boost - 0.05).abs() < 1e-6);
        assert_eq!(reasons, vec![REASON_CATEGORY]);
    }

    #[test]
    fn test_tag_overlap() {
        let config = BoostConfig::default();
        let mut reasons = Vec::new();
        let boost = config.apply(
            &user("Denver", "hiking,music"),
            &event("Austin", "outdoor", "climbing;hiking"),
            &mut reasons,
        );
        assert!((boost - 0.03).abs() < 1e-6);
        assert_eq!(reasons, vec![REASON_TAG]);
    }

    #[test]
    fn test_boosts_stack_in_fixed_reason_order() {
        let config = BoostConfig::default();
        let mut reasons = Vec::new();
        let boost = config.apply(
            &user("Austin", "hiking,music"),
            &event("Austin", "music", "hiking"),
            &mut reasons,
        );
        assert!((boost - 0.18).abs() < 1e-6);
        assert_eq!(reasons, vec![REASON_CITY, REASON_CATEGORY, REASON_TAG]);
    }

    #[test]
    fn test_token_overlap_is_not_substring_match() {
        // "music" must not match "musicology".
        let config = BoostConfig::default();
        let mut reasons = Vec::new();
        let boost = config.apply(
            &user("", "music"),
            &event("", "musicology", ""),
            &mut reasons,
        );
        assert_eq!(boost, 0.0);
    }
}
