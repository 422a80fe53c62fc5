//! Core types for the Styleloft catalog

use serde::{Deserialize, Serialize};

/// Storefront section a banner strip is mounted into.
///
/// Each section has a stable string id, used as the key in `banners.json`
/// overrides and as the section anchor in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Daily promotional deals strip
    Deals,
    /// Best-selling brands strip
    BestSellers,
}

impl Section {
    /// All sections, in storefront display order.
    pub const ALL: [Section; 2] = [Section::Deals, Section::BestSellers];

    /// Stable string identifier for this section.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Deals => "deals",
            Section::BestSellers => "best",
        }
    }

    /// Heading shown above this section's gallery.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Deals => "Deals of the Day",
            Section::BestSellers => "Best Sellers",
        }
    }

    /// Parse a section from its stable id.
    pub fn from_id(id: &str) -> Option<Section> {
        match id {
            "deals" => Some(Section::Deals),
            "best" => Some(Section::BestSellers),
            _ => None,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// One promotional banner: a single image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// Absolute URL of the banner image
    pub img: String,
}

impl Banner {
    /// Create a banner from an image URL.
    pub fn new(img: impl Into<String>) -> Self {
        Self { img: img.into() }
    }
}

/// One clothing item in the searchable catalog.
///
/// Mirrors the columns of the cleaned catalog CSV: a product image URL,
/// a customer-facing description, and the feature text search runs over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Absolute URL of the product image
    pub image: String,
    /// Customer-facing description
    pub description: String,
    /// Feature text used for search ranking
    pub features: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn test_section_from_unknown_id() {
        assert_eq!(Section::from_id("trending"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn test_section_display() {
        assert_eq!(Section::Deals.to_string(), "deals");
        assert_eq!(Section::BestSellers.to_string(), "best");
    }

    #[test]
    fn test_banner_json_shape() {
        let banner: Banner = serde_json::from_str(r#"{"img": "https://example.com/a.jpg"}"#)
            .expect("banner should parse");
        assert_eq!(banner.img, "https://example.com/a.jpg");
    }

    #[test]
    fn test_banner_new() {
        let banner = Banner::new("a.jpg");
        assert_eq!(banner.img, "a.jpg");
    }
}
