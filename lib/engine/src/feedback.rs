//! Synthetic feedback simulation
//!
//! An optional pass that nudges recommendation scores with sampled
//! like/dislike events. This is pure simulation driven by an explicit
//! seed; it must never be mistaken for real user feedback, and skipping
//! the pass leaves the rest of the pipeline untouched.

use crate::recommend::{Recommendation, REASON_DISLIKED, REASON_LIKED};
use ahash::AHashMap;
use matchx_schema::EntityKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Sampling ratios and score adjustments
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Probability a recommendation draws a synthetic like
    pub like_ratio: f64,
    /// Probability a recommendation draws a synthetic dislike
    pub dislike_ratio: f64,
    /// Additive boost for a like
    pub like_boost: f32,
    /// Subtractive penalty for a dislike; the score is floored at 0
    pub dislike_penalty: f32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            like_ratio: 0.03,
            dislike_ratio: 0.01,
            like_boost: 0.20,
            dislike_penalty: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Like,
    Dislike,
}

/// One sampled feedback event, consumed immediately by [`FeedbackSimulator::apply`]
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackEvent {
    pub user_id: String,
    pub item_id: String,
    pub item_type: EntityKind,
    pub polarity: Polarity,
    /// Size of the score adjustment; subtracted for dislikes
    pub magnitude: f32,
}

/// Samples synthetic feedback over a recommendation list.
///
/// The random source is seeded explicitly so identical seeds produce
/// identical events and therefore identical adjusted output.
#[derive(Debug)]
pub struct FeedbackSimulator {
    config: FeedbackConfig,
    rng: StdRng,
}

impl FeedbackSimulator {
    #[must_use]
    pub fn new(config: FeedbackConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one uniform sample per recommendation, in list order.
    pub fn sample(&mut self, recommendations: &[Recommendation]) -> Vec<FeedbackEvent> {
        let mut events = Vec::new();
        for rec in recommendations {
            let draw: f64 = self.rng.random();
            let (polarity, magnitude) = if draw < self.config.dislike_ratio {
                (Polarity::Dislike, self.config.dislike_penalty)
            } else if draw < self.config.dislike_ratio + self.config.like_ratio {
                (Polarity::Like, self.config.like_boost)
            } else {
                continue;
            };
            events.push(FeedbackEvent {
                user_id: rec.user_id.clone(),
                item_id: rec.item_id.clone(),
                item_type: rec.item_type,
                polarity,
                magnitude,
            });
        }
        events
    }

    /// Adjust matching recommendations in place and append the feedback
    /// reason. Callers re-rank afterwards; the adjustment itself does not
    /// reorder anything.
    pub fn apply(&self, recommendations: &mut [Recommendation], events: &[FeedbackEvent]) {
        let by_key: AHashMap<(&str, &str, EntityKind), (Polarity, f32)> = events
            .iter()
            .map(|e| {
                let key = (e.user_id.as_str(), e.item_id.as_str(), e.item_type);
                (key, (e.polarity, e.magnitude))
            })
            .collect();

        for rec in recommendations.iter_mut() {
            let key = (rec.user_id.as_str(), rec.item_id.as_str(), rec.item_type);
            match by_key.get(&key).copied() {
                Some((Polarity::Like, magnitude)) => {
                    rec.score += magnitude;
                    rec.reasons.push(REASON_LIKED.to_string());
                }
                Some((Polarity::Dislike, magnitude)) => {
                    rec.score = (rec.score - magnitude).max(0.0);
                    rec.reasons.push(REASON_DISLIKED.to_string());
                }
                None => {}
            }
        }
    }
}
