//! Catalog construction and access.
//!
//! The catalog is built once at application start and never mutated after:
//! banner sections and clothing items are embedded defaults, optionally
//! overridden per-file by `banners.json` and `catalog.csv` in the data
//! directory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::data;
use crate::error::CatalogResult;
use crate::search::SearchIndex;
use crate::types::{Banner, ClothingItem, Section};

/// Banner override file inside the data directory.
const BANNERS_FILE: &str = "banners.json";

/// Clothing item override file inside the data directory.
const CATALOG_FILE: &str = "catalog.csv";

/// Immutable store of banner sections and searchable clothing items.
#[derive(Debug)]
pub struct Catalog {
    sections: HashMap<Section, Vec<Banner>>,
    items: Vec<ClothingItem>,
    index: SearchIndex,
}

impl Catalog {
    /// Build a catalog from explicit data.
    pub fn new(sections: HashMap<Section, Vec<Banner>>, items: Vec<ClothingItem>) -> Self {
        let index = SearchIndex::build(&items);
        Self {
            sections,
            items,
            index,
        }
    }

    /// Catalog backed entirely by the embedded default data.
    pub fn builtin() -> Self {
        let mut sections = HashMap::new();
        sections.insert(Section::Deals, data::deals_banners());
        sections.insert(Section::BestSellers, data::best_seller_banners());
        Self::new(sections, data::default_items())
    }

    /// Load a catalog from `dir`, falling back per-file to embedded data.
    ///
    /// - `banners.json`: map of section id to banner arrays. Sections not
    ///   named in the file keep their embedded banners; unknown section ids
    ///   are logged and skipped.
    /// - `catalog.csv`: clothing item rows (`image,description,features`).
    ///
    /// A missing file (or a missing directory) is not an error; a file that
    /// exists but cannot be parsed is.
    pub fn load(dir: impl AsRef<Path>) -> CatalogResult<Self> {
        let dir = dir.as_ref();

        let mut sections = HashMap::new();
        sections.insert(Section::Deals, data::deals_banners());
        sections.insert(Section::BestSellers, data::best_seller_banners());

        let banners_path = dir.join(BANNERS_FILE);
        if banners_path.exists() {
            let raw = fs::read_to_string(&banners_path)?;
            let overrides: HashMap<String, Vec<Banner>> = serde_json::from_str(&raw)?;
            for (id, banners) in overrides {
                match Section::from_id(&id) {
                    Some(section) => {
                        tracing::debug!(section = %section, count = banners.len(), "Banner override loaded");
                        sections.insert(section, banners);
                    }
                    None => {
                        tracing::warn!(id = %id, "Ignoring unknown section in {}", BANNERS_FILE);
                    }
                }
            }
        }

        let catalog_path = dir.join(CATALOG_FILE);
        let items = if catalog_path.exists() {
            let mut reader = csv::Reader::from_path(&catalog_path)?;
            let mut items = Vec::new();
            for row in reader.deserialize() {
                let item: ClothingItem = row?;
                items.push(item);
            }
            tracing::debug!(count = items.len(), "Clothing items loaded from {}", CATALOG_FILE);
            items
        } else {
            data::default_items()
        };

        Ok(Self::new(sections, items))
    }

    /// Banners mounted in `section`, in render order.
    ///
    /// A section with no data yields an empty slice: its gallery renders
    /// nothing and other sections are unaffected.
    pub fn section(&self, section: Section) -> &[Banner] {
        self.sections
            .get(&section)
            .map(|banners| banners.as_slice())
            .unwrap_or(&[])
    }

    /// All clothing items, in catalog order.
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    /// The best-matching items for `query`, highest similarity first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&ClothingItem> {
        self.index
            .rank(query, limit)
            .into_iter()
            .map(|idx| &self.items[idx])
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
