// Text tokenization shared by vocabulary fitting and transforms

/// Tokenize text for TF-IDF indexing
/// Uses lowercase normalization and removes punctuation
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|s| !s.is_empty() && s.len() > 1) // Filter single chars
        .collect()
}

/// Expand tokens into n-grams up to `max_n` words per term.
///
/// Returns the unigrams themselves for `max_n == 1`; higher orders append
/// adjacent word groups joined by a single space ("machine learning").
pub fn ngrams(tokens: &[String], max_n: usize) -> Vec<String> {
    let mut terms = tokens.to_vec();
    for n in 2..=max_n {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        let tokens = tokenize("Hiking, Music & Outdoor-Climbing!");
        assert_eq!(tokens, vec!["hiking", "music", "outdoor", "climbing"]);
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = tokenize("a B cd");
        assert_eq!(tokens, vec!["cd"]);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ;;; ").is_empty());
    }

    #[test]
    fn test_bigrams_include_unigrams() {
        let tokens = tokenize("data science jobs");
        let terms = ngrams(&tokens, 2);
        assert_eq!(
            terms,
            vec!["data", "science", "jobs", "data science", "science jobs"]
        );
    }

    #[test]
    fn test_ngrams_shorter_than_order() {
        let tokens = tokenize("hiking");
        assert_eq!(ngrams(&tokens, 2), vec!["hiking"]);
    }
}
