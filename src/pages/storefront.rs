//! Storefront - the deals page.
//!
//! Renders the two banner galleries off the shared catalog, plus the
//! search bar. Each gallery is fed its section's banners in catalog order;
//! a section with no data simply renders nothing.

use dioxus::prelude::*;
use styleloft_core::{Banner, Section};

use crate::components::{BannerGallery, NavHeader, NavLocation, SearchBar};
use crate::context::{use_catalog, use_catalog_ready};

/// Deals page component.
#[component]
pub fn Storefront() -> Element {
    // Get shared catalog from context (loaded in App)
    let catalog = use_catalog();
    let catalog_ready = use_catalog_ready();

    // Local UI state
    let mut deals: Signal<Vec<Banner>> = use_signal(Vec::new);
    let mut best_sellers: Signal<Vec<Banner>> = use_signal(Vec::new);

    // Pull section banners when the catalog becomes ready
    use_effect(move || {
        if catalog_ready() {
            spawn(async move {
                let shared = catalog();
                let guard = shared.read().await;
                if let Some(ref cat) = *guard {
                    deals.set(cat.section(Section::Deals).to_vec());
                    best_sellers.set(cat.section(Section::BestSellers).to_vec());
                }
            });
        }
    });

    rsx! {
        NavHeader { current: NavLocation::Deals }

        main { class: "storefront",
            SearchBar {}

            BannerGallery {
                title: Section::Deals.display_name().to_string(),
                banners: deals(),
            }

            BannerGallery {
                title: Section::BestSellers.display_name().to_string(),
                banners: best_sellers(),
            }
        }
    }
}
