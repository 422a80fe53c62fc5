//! Item Card Component
//!
//! One search hit: the product image with its description underneath.

use dioxus::prelude::*;
use styleloft_core::ClothingItem;

/// Product card for a single catalog item.
#[component]
pub fn ItemCard(item: ClothingItem) -> Element {
    rsx! {
        div { class: "item-card",
            img {
                class: "item-card__img",
                src: "{item.image}",
                alt: "{item.description}",
            }
            p { class: "item-card__description", "{item.description}" }
        }
    }
}
