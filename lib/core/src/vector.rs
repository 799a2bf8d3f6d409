use serde::{Deserialize, Serialize};

/// A sparse vector over a fitted vocabulary.
///
/// Entries are kept sorted by term index so dot products are a single
/// merge walk. Weights are non-negative TF-IDF values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    weights: Vec<f32>,
}

impl SparseVector {
    /// Create a vector from (index, weight) entries, dropping zero weights.
    #[must_use]
    pub fn new(mut entries: Vec<(u32, f32)>) -> Self {
        entries.retain(|(_, w)| *w != 0.0);
        entries.sort_by_key(|(i, _)| *i);
        let indices = entries.iter().map(|(i, _)| *i).collect();
        let weights = entries.iter().map(|(_, w)| *w).collect();
        Self { indices, weights }
    }

    /// The all-zero vector: the formal cold-start signal for an empty document.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over (index, weight) entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.indices.iter().copied().zip(self.weights.iter().copied())
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f32 {
        self.weights.iter().map(|w| w * w).sum::<f32>().sqrt()
    }

    /// Normalize to unit length; the all-zero vector stays all-zero.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f32::EPSILON {
            let inv_norm = 1.0 / norm;
            for w in &mut self.weights {
                *w *= inv_norm;
            }
        }
    }

    /// Get normalized copy
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }

    /// Dot product via merge walk over the sorted indices.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let mut sum = 0.0f32;
        let (mut a, mut b) = (0usize, 0usize);
        while a < self.indices.len() && b < other.indices.len() {
            match self.indices[a].cmp(&other.indices[b]) {
                std::cmp::Ordering::Less => a += 1,
                std::cmp::Ordering::Greater => b += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.weights[a] * other.weights[b];
                    a += 1;
                    b += 1;
                }
            }
        }
        sum
    }

    /// Compute cosine similarity with another vector.
    /// Equals the plain dot product when both vectors are unit-norm.
    pub fn cosine_similarity(&self, other: &SparseVector) -> f32 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        self.dot(other) / (norm_a * norm_b)
    }
}
