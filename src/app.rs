use std::sync::Arc;

use dioxus::prelude::*;
use styleloft_core::Catalog;
use tokio::sync::RwLock;

use crate::context::{get_data_dir, SharedCatalog};
use crate::pages::{Landing, Results, Storefront};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with "Browse Today's Deals" button
/// - `/deals` - Storefront with the banner galleries and search
/// - `/search/:query` - Search results for a query
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/deals")]
    Storefront {},
    #[route("/search/:query")]
    Results { query: String },
}

/// Root application component.
///
/// Provides global styles, catalog context, and routing.
#[component]
pub fn App() -> Element {
    // Initialize shared catalog state
    let catalog: Signal<SharedCatalog> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut catalog_ready: Signal<bool> = use_signal(|| false);

    // Provide catalog context to all child components
    use_context_provider(|| catalog);
    use_context_provider(|| catalog_ready);

    // Load catalog on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            let loaded = match Catalog::load(&data_dir) {
                Ok(loaded) => loaded,
                Err(e) => {
                    // Broken overrides fall back to the embedded catalog
                    tracing::error!("Failed to load catalog from {:?}: {}", data_dir, e);
                    Catalog::builtin()
                }
            };

            let shared = catalog();
            let mut guard = shared.write().await;
            *guard = Some(loaded);
            drop(guard);
            catalog_ready.set(true);
            tracing::info!("Catalog ready");
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
