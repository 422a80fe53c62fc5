//! Banner Gallery Component
//!
//! Displays a horizontal strip of promotional banner images.

use dioxus::prelude::*;
use styleloft_core::Banner;

/// Banner strip gallery component.
///
/// One container per banner, in input order, each holding exactly one image
/// element whose source is the banner URL. Containers are keyed by position,
/// so a sequence containing the same banner twice renders it twice.
///
/// # Examples
///
/// ```rust
/// let banners = vec![
///     Banner::new("https://cdn.example.com/a.jpg"),
///     Banner::new("https://cdn.example.com/b.jpg"),
/// ];
///
/// rsx! {
///     BannerGallery {
///         title: "Deals of the Day".to_string(),
///         banners: banners,
///     }
/// }
/// ```
#[component]
pub fn BannerGallery(
    /// Section heading
    title: String,
    /// Banners to display, in render order
    banners: Vec<Banner>,
) -> Element {
    if banners.is_empty() {
        return VNode::empty();
    }

    rsx! {
        section { class: "banner-gallery-section",
            h3 { class: "banner-gallery__title",
                "{title}"
            }

            div { class: "banner-gallery",
                for (idx, banner) in banners.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "banner-gallery__item",

                        img {
                            src: "{banner.img}",
                            alt: "{title}",
                            class: "banner-gallery__img",
                        }
                    }
                }
            }
        }
    }
}
