//! Landing page - Entry point to the storefront.
//!
//! Hero with the brand, a tagline, and a single call-to-action that takes
//! the visitor to the deals page.

use dioxus::prelude::*;

use crate::app::Route;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    let browse_deals = move |_| {
        navigator.push(Route::Storefront {});
    };

    rsx! {
        main { class: "landing",
            div { class: "landing-backdrop" }

            header { class: "landing-header",
                h1 { class: "page-title", "Styleloft" }
                p { class: "tagline", "fresh fashion, unbeatable prices" }

                button {
                    class: "btn-enter",
                    onclick: browse_deals,
                    "Browse Today's Deals"
                }
            }

            section { class: "pitch-section",
                h2 { class: "section-header", "Why Styleloft" }
                p { class: "body-text", style: "margin-top: 1rem;",
                    "Hand-picked "
                    span { class: "highlight-term", "deals of the day" }
                    " and the season's "
                    span { class: "highlight-term", "best sellers" }
                    ", refreshed daily. Browse the strips, search for a style, "
                    "and let the right outfit find you."
                }
            }
        }
    }
}
