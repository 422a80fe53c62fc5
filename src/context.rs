//! Catalog context provider for Styleloft.
//!
//! Provides the loaded Catalog to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! let ready = use_catalog_ready();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use styleloft_core::Catalog;
use tokio::sync::RwLock;

/// Shared catalog type for context.
///
/// The catalog is wrapped in Arc<RwLock<>> so that pages can read it
/// concurrently while startup fills it in exactly once.
pub type SharedCatalog = Arc<RwLock<Option<Catalog>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the Catalog from context.
///
/// Returns a Signal containing the shared catalog state.
pub fn use_catalog() -> Signal<SharedCatalog> {
    use_context::<Signal<SharedCatalog>>()
}

/// Hook to check if the catalog has finished loading.
///
/// Returns a reactive signal that flips to true once startup loading is done.
pub fn use_catalog_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
