//! Lexical search over catalog items.
//!
//! Items are ranked by cosine similarity between term-frequency vectors of
//! the query and each item's preprocessed feature text. Garment category
//! words are stripped from feature text before indexing so that ranking is
//! driven by style attributes (color, fit, occasion) rather than by the
//! garment category every item shares with its neighbors.

use std::collections::HashMap;

use crate::types::ClothingItem;

/// Number of results a search returns unless a caller asks for more.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Garment category words removed from feature text before indexing.
const GARMENT_WORDS: [&str; 7] = [
    "dress", "top", "trousers", "anarkali", "shirt", "tee", "pant",
];

/// Strip garment category words and collapse runs of whitespace.
///
/// Removal is plain substring replacement, so a word embedded in a longer
/// token is stripped too ("t-shirt" loses its "shirt").
pub fn preprocess(text: &str) -> String {
    let mut text = text.to_lowercase();
    for word in GARMENT_WORDS {
        text = text.replace(word, "");
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cosine similarity between the term-frequency vectors of two texts.
///
/// Returns 0.0 when either text has no terms or the texts share none.
pub fn similarity(a: &str, b: &str) -> f64 {
    cosine(&term_frequencies(a), &term_frequencies(b))
}

/// Lowercased alphanumeric tokens with counts.
fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let mut freqs = HashMap::new();
    for token in text.to_lowercase().split_whitespace() {
        let token = token.trim_matches(|c: char| !c.is_alphanumeric());
        if token.is_empty() {
            continue;
        }
        *freqs.entry(token.to_string()).or_insert(0.0) += 1.0;
    }
    freqs
}

fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }

    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();
    dot / (norm_a * norm_b)
}

/// Precomputed term vectors for a catalog's items.
#[derive(Debug, Clone)]
pub(crate) struct SearchIndex {
    docs: Vec<HashMap<String, f64>>,
}

impl SearchIndex {
    /// Build an index over the items' preprocessed feature text.
    pub(crate) fn build(items: &[ClothingItem]) -> Self {
        let docs = items
            .iter()
            .map(|item| term_frequencies(&preprocess(&item.features)))
            .collect();
        Self { docs }
    }

    /// Indices of the best-matching items, highest similarity first.
    ///
    /// Zero-similarity items are excluded; ties keep catalog order. An
    /// empty or whitespace query matches nothing.
    pub(crate) fn rank(&self, query: &str, limit: usize) -> Vec<usize> {
        let query_vec = term_frequencies(query);
        if query_vec.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .docs
            .iter()
            .enumerate()
            .map(|(idx, doc)| (idx, cosine(&query_vec, doc)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(limit);
        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(features: &str) -> ClothingItem {
        ClothingItem {
            image: "img.jpg".to_string(),
            description: "desc".to_string(),
            features: features.to_string(),
        }
    }

    #[test]
    fn test_preprocess_strips_garment_words() {
        assert_eq!(preprocess("navy blue dress casual"), "navy blue casual");
        assert_eq!(preprocess("printed kurta top"), "printed kurta");
    }

    #[test]
    fn test_preprocess_collapses_whitespace() {
        assert_eq!(preprocess("  red   shirt   slim "), "red slim");
    }

    #[test]
    fn test_preprocess_strips_substrings() {
        // Substring removal mirrors the cleaning step the catalog was built with.
        assert_eq!(preprocess("t-shirt"), "t-");
    }

    #[test]
    fn test_similarity_identical_texts() {
        let score = similarity("navy blue casual", "navy blue casual");
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_disjoint_texts() {
        assert_eq!(similarity("navy blue", "mustard yellow"), 0.0);
    }

    #[test]
    fn test_similarity_empty_text() {
        assert_eq!(similarity("", "navy blue"), 0.0);
        assert_eq!(similarity("navy blue", "   "), 0.0);
    }

    #[test]
    fn test_rank_prefers_better_overlap() {
        let items = vec![
            item("men charcoal grey training activewear"),
            item("women navy blue floral casual"),
            item("women navy blue floral festive"),
        ];
        let index = SearchIndex::build(&items);

        let ranked = index.rank("navy blue floral casual", DEFAULT_SEARCH_LIMIT);
        assert_eq!(ranked[0], 1);
        assert!(ranked.contains(&2));
        assert!(!ranked.contains(&0));
    }

    #[test]
    fn test_rank_excludes_zero_similarity() {
        let items = vec![item("women navy blue"), item("men charcoal grey")];
        let index = SearchIndex::build(&items);
        assert_eq!(index.rank("crimson velvet", DEFAULT_SEARCH_LIMIT), Vec::<usize>::new());
    }

    #[test]
    fn test_rank_respects_limit() {
        let items: Vec<ClothingItem> =
            (0..8).map(|_| item("navy blue casual")).collect();
        let index = SearchIndex::build(&items);
        assert_eq!(index.rank("navy", 3).len(), 3);
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let items: Vec<ClothingItem> =
            (0..4).map(|_| item("navy blue casual")).collect();
        let index = SearchIndex::build(&items);
        assert_eq!(index.rank("navy", DEFAULT_SEARCH_LIMIT), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rank_empty_query_matches_nothing() {
        let items = vec![item("navy blue casual")];
        let index = SearchIndex::build(&items);
        assert!(index.rank("", DEFAULT_SEARCH_LIMIT).is_empty());
        assert!(index.rank("   ", DEFAULT_SEARCH_LIMIT).is_empty());
    }

    #[test]
    fn test_rank_matches_on_preprocessed_features() {
        // "dress" is stripped from features at indexing time, so querying for
        // the garment word finds nothing while style words still match.
        let items = vec![item("black floral dress")];
        let index = SearchIndex::build(&items);
        assert!(index.rank("dress", DEFAULT_SEARCH_LIMIT).is_empty());
        assert_eq!(index.rank("floral", DEFAULT_SEARCH_LIMIT), vec![0]);
    }
}
