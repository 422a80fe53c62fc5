//! Property-based tests for catalog ordering and search ranking
//!
//! Uses proptest to verify the invariants the storefront relies on: section
//! sequences render exactly as defined, and search output is a ranked
//! subset of the catalog.

use std::collections::HashMap;
use std::fs;

use proptest::prelude::*;
use styleloft_core::{preprocess, similarity, Banner, Catalog, ClothingItem, Section};
use tempfile::TempDir;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate plausible banner URLs (duplicates allowed)
fn banner_strategy() -> impl Strategy<Value = Banner> {
    prop::string::string_regex("[a-z0-9]{1,12}")
        .expect("valid regex")
        .prop_map(|name| Banner::new(format!("https://cdn.example.com/{name}.jpg")))
}

fn banner_seq_strategy(max: usize) -> impl Strategy<Value = Vec<Banner>> {
    prop::collection::vec(banner_strategy(), 0..max)
}

/// Feature/query words drawn from a shared vocabulary so overlap is common
static VOCAB: [&str; 12] = [
    "navy", "blue", "floral", "casual", "festive", "cotton", "slim", "printed", "yellow",
    "green", "black", "embroidered",
];

fn words_strategy(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB.as_slice()), min..max)
        .prop_map(|words| words.join(" "))
}

fn items_strategy(max: usize) -> impl Strategy<Value = Vec<ClothingItem>> {
    prop::collection::vec(
        words_strategy(1, 8).prop_map(|features| ClothingItem {
            image: "https://cdn.example.com/item.jpg".to_string(),
            description: "Generated item".to_string(),
            features,
        }),
        0..max,
    )
}

// ============================================================================
// Section Ordering Properties
// ============================================================================

proptest! {
    /// Banner sequences round-trip through a banners.json override unchanged
    #[test]
    fn banner_order_roundtrips_through_override(banners in banner_seq_strategy(12)) {
        let dir = TempDir::new().unwrap();
        let json = serde_json::json!({ "deals": &banners });
        fs::write(dir.path().join("banners.json"), json.to_string()).unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        prop_assert_eq!(catalog.section(Section::Deals), banners.as_slice());
    }

    /// Rendering a doubled sequence yields one container per occurrence
    #[test]
    fn doubled_sequence_doubles_containers(banners in banner_seq_strategy(8)) {
        let mut doubled = banners.clone();
        doubled.extend(banners.iter().cloned());

        let mut sections = HashMap::new();
        sections.insert(Section::Deals, doubled);
        let catalog = Catalog::new(sections, Vec::new());

        let rendered = catalog.section(Section::Deals);
        prop_assert_eq!(rendered.len(), banners.len() * 2);
        for (idx, banner) in banners.iter().enumerate() {
            prop_assert_eq!(&rendered[idx], banner);
            prop_assert_eq!(&rendered[idx + banners.len()], banner);
        }
    }
}

// ============================================================================
// Search Ranking Properties
// ============================================================================

proptest! {
    /// Results are always drawn from the catalog and bounded by the limit
    #[test]
    fn search_results_are_bounded_catalog_subset(
        items in items_strategy(15),
        query in words_strategy(1, 5),
        limit in 0..10usize,
    ) {
        let catalog = Catalog::new(HashMap::new(), items.clone());
        let hits = catalog.search(&query, limit);

        prop_assert!(hits.len() <= limit);
        for hit in &hits {
            prop_assert!(items.iter().any(|item| item == *hit));
        }
    }

    /// Hits come back in non-increasing similarity order, all above zero
    #[test]
    fn search_scores_are_sorted_and_positive(
        items in items_strategy(15),
        query in words_strategy(1, 5),
    ) {
        let catalog = Catalog::new(HashMap::new(), items);
        let hits = catalog.search(&query, 10);

        let scores: Vec<f64> = hits
            .iter()
            .map(|hit| similarity(&query, &preprocess(&hit.features)))
            .collect();

        for score in &scores {
            prop_assert!(*score > 0.0);
        }
        for pair in scores.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    /// Ranking is deterministic
    #[test]
    fn search_is_deterministic(
        items in items_strategy(15),
        query in words_strategy(1, 5),
    ) {
        let catalog = Catalog::new(HashMap::new(), items);
        let first: Vec<ClothingItem> =
            catalog.search(&query, 10).into_iter().cloned().collect();
        let second: Vec<ClothingItem> =
            catalog.search(&query, 10).into_iter().cloned().collect();
        prop_assert_eq!(first, second);
    }
}
