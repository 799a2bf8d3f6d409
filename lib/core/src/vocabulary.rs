use ahash::AHashMap;

/// Term vocabulary fitted over a document corpus.
///
/// Terms are assigned dense indices in lexicographic order so that fitting
/// the same corpus always yields the same index layout.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: AHashMap<String, u32>,
    terms: Vec<String>,
    doc_freqs: Vec<u32>,
    total_docs: u64,
}

impl Vocabulary {
    /// Build a vocabulary from (term, document-frequency) pairs.
    ///
    /// The pairs are re-sorted lexicographically; index assignment does not
    /// depend on the order they are supplied in.
    #[must_use]
    pub fn from_doc_freqs(mut term_dfs: Vec<(String, u32)>, total_docs: u64) -> Self {
        term_dfs.sort_by(|a, b| a.0.cmp(&b.0));
        let mut index = AHashMap::with_capacity(term_dfs.len());
        let mut terms = Vec::with_capacity(term_dfs.len());
        let mut doc_freqs = Vec::with_capacity(term_dfs.len());
        for (term, df) in term_dfs {
            index.insert(term.clone(), terms.len() as u32);
            terms.push(term);
            doc_freqs.push(df);
        }
        Self {
            index,
            terms,
            doc_freqs,
            total_docs,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents the vocabulary was fitted on
    #[inline]
    #[must_use]
    pub fn total_docs(&self) -> u64 {
        self.total_docs
    }

    /// Dense index of a term, if it was retained during fitting
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<u32> {
        self.index.get(term).copied()
    }

    /// Term at a dense index
    #[inline]
    pub fn term(&self, index: u32) -> Option<&str> {
        self.terms.get(index as usize).map(String::as_str)
    }

    /// Document frequency of the term at a dense index
    #[inline]
    pub fn doc_freq(&self, index: u32) -> u32 {
        self.doc_freqs.get(index as usize).copied().unwrap_or(0)
    }

    /// Iterate terms in index order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_lexicographic() {
        let vocab = Vocabulary::from_doc_freqs(
            vec![
                ("music".to_string(), 2),
                ("hiking".to_string(), 1),
                ("art".to_string(), 3),
            ],
            4,
        );
        assert_eq!(vocab.index_of("art"), Some(0));
        assert_eq!(vocab.index_of("hiking"), Some(1));
        assert_eq!(vocab.index_of("music"), Some(2));
        assert_eq!(vocab.doc_freq(0), 3);
        assert_eq!(vocab.total_docs(), 4);
    }

    #[test]
    fn test_unknown_term() {
        let vocab = Vocabulary::from_doc_freqs(vec![("art".to_string(), 1)], 1);
        assert_eq!(vocab.index_of("unknown"), None);
        assert_eq!(vocab.term(5), None);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
    }
}
