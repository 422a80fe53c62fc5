//! Search results page.
//!
//! Handles `/search/:query` routes: runs the catalog search for the query
//! and renders one card per hit, best match first.

use dioxus::prelude::*;
use styleloft_core::{ClothingItem, DEFAULT_SEARCH_LIMIT};

use crate::components::{ItemCard, NavHeader, NavLocation};
use crate::context::{use_catalog, use_catalog_ready};

/// Search results component.
#[component]
pub fn Results(query: String) -> Element {
    let catalog = use_catalog();
    let catalog_ready = use_catalog_ready();

    let mut hits: Signal<Vec<ClothingItem>> = use_signal(Vec::new);
    let mut searched = use_signal(|| false);

    // Run the search when the catalog is ready or the query changes
    let search_query = query.clone();
    use_effect(move || {
        let query = search_query.clone();
        if catalog_ready() {
            spawn(async move {
                let shared = catalog();
                let guard = shared.read().await;
                if let Some(ref cat) = *guard {
                    let found = cat
                        .search(&query, DEFAULT_SEARCH_LIMIT)
                        .into_iter()
                        .cloned()
                        .collect();
                    hits.set(found);
                    searched.set(true);
                }
            });
        }
    });

    rsx! {
        NavHeader { current: NavLocation::Deals }

        main { class: "results",
            h2 { class: "section-header", "Results for \"{query}\"" }

            if searched() && hits().is_empty() {
                p { class: "results-empty", "No matching styles found." }
            } else {
                div { class: "results-grid",
                    for (idx, item) in hits().into_iter().enumerate() {
                        ItemCard { key: "{idx}", item }
                    }
                }
            }
        }
    }
}
