//! Search Bar Component
//!
//! Query input that routes to the results page on submit. Blank queries
//! are ignored.

use dioxus::prelude::*;

use crate::app::Route;

/// Catalog search input with a submit button.
#[component]
pub fn SearchBar() -> Element {
    let navigator = use_navigator();
    let mut query = use_signal(String::new);

    let handle_submit = move |_| {
        let q = query().trim().to_string();
        if q.is_empty() {
            return;
        }
        navigator.push(Route::Results { query: q });
    };

    // Enter submits from inside the input
    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            let q = query().trim().to_string();
            if q.is_empty() {
                return;
            }
            navigator.push(Route::Results { query: q });
        }
    };

    rsx! {
        div { class: "search-bar",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search styles, e.g. \"navy blue kurta\"",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
                onkeydown: handle_keydown,
            }

            button {
                class: "search-btn",
                onclick: handle_submit,
                title: "Search (Enter)",

                // Lucide search icon
                svg {
                    class: "search-icon",
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }
            }
        }
    }
}
