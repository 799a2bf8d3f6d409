//! TF-IDF model fitted over the full document corpus
//!
//! Users and catalog items are fitted together in a single pass so every
//! vector is expressed over one shared vocabulary and dot products between
//! them are meaningful. Fitting is fully deterministic.

use crate::tokenize::{ngrams, tokenize};
use crate::vector::SparseVector;
use crate::vocabulary::Vocabulary;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Configuration for vocabulary fitting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfConfig {
    /// Cap on vocabulary size; highest-document-frequency terms win,
    /// ties broken lexicographically. `None` keeps everything.
    pub max_features: Option<usize>,
    /// Minimum document frequency for a term to be retained
    pub min_df: u32,
    /// Largest n-gram order ("2" fits unigrams and bigrams)
    pub ngram_max: usize,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            max_features: Some(5000),
            min_df: 1,
            ngram_max: 2,
        }
    }
}

/// A fitted TF-IDF weighting model
///
/// Weights use the smoothed formula `idf = ln((1 + n) / (1 + df)) + 1`,
/// `weight = tf * idf`, and every transformed vector is L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    config: TfidfConfig,
    vocabulary: Vocabulary,
    idf: Vec<f32>,
}

impl TfidfModel {
    /// Fit a vocabulary and IDF table over the given documents.
    pub fn fit<'a, I>(config: TfidfConfig, documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut term_dfs: AHashMap<String, u32> = AHashMap::new();
        let mut total_docs = 0u64;

        for doc in documents {
            total_docs += 1;
            let terms: AHashSet<String> =
                ngrams(&tokenize(doc), config.ngram_max).into_iter().collect();
            for term in terms {
                *term_dfs.entry(term).or_insert(0) += 1;
            }
        }

        let mut retained: Vec<(String, u32)> = term_dfs
            .into_iter()
            .filter(|(_, df)| *df >= config.min_df)
            .collect();

        if let Some(cap) = config.max_features {
            if retained.len() > cap {
                retained.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                retained.truncate(cap);
            }
        }

        let vocabulary = Vocabulary::from_doc_freqs(retained, total_docs);
        let idf = (0..vocabulary.len() as u32)
            .map(|i| {
                let df = vocabulary.doc_freq(i);
                ((1.0 + total_docs as f32) / (1.0 + df as f32)).ln() + 1.0
            })
            .collect();

        Self {
            config,
            vocabulary,
            idf,
        }
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &TfidfConfig {
        &self.config
    }

    /// IDF weight for a vocabulary index
    #[inline]
    pub fn idf(&self, index: u32) -> f32 {
        self.idf.get(index as usize).copied().unwrap_or(0.0)
    }

    /// Transform a document into an L2-normalized TF-IDF vector.
    ///
    /// A document with no recognized terms yields the all-zero vector.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut term_freqs: AHashMap<u32, f32> = AHashMap::new();
        for term in ngrams(&tokenize(document), self.config.ngram_max) {
            if let Some(index) = self.vocabulary.index_of(&term) {
                *term_freqs.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let entries: Vec<(u32, f32)> = term_freqs
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf(index)))
            .collect();

        let mut vector = SparseVector::new(entries);
        vector.normalize();
        vector
    }
}
