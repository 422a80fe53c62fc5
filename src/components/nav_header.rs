//! Navigation Header Component
//!
//! Horizontal header with the brand mark, nav links, and nothing else.
//! Clicking the brand mark returns to the landing page.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the storefront
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Deals,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Deals => "Deals",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Landing {},
            NavLocation::Deals => Route::Storefront {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation Header component
///
/// - Left: "Styleloft" brand mark; one click navigates to the landing page
/// - Center: Navigation links with Lucide icons
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let navigator = use_navigator();

    let locations = [NavLocation::Home, NavLocation::Deals];

    // Brand mark click returns to the landing page
    let go_home = move |_| {
        navigator.push(Route::Landing {});
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                // Left: brand mark
                div { class: "nav-title",
                    h1 {
                        class: "app-title",
                        onclick: go_home,
                        "Styleloft"
                    }
                }

                // Center: Navigation links
                nav { class: "nav-links",
                    for location in &locations {
                        Link {
                            to: location.route(),
                            class: if *location == props.current { "nav-link active" } else { "nav-link" },

                            // Icon
                            span { class: "nav-link-icon",
                                {render_nav_icon(*location)}
                            }

                            // Label
                            span { class: "nav-link-label", "{location.display_name()}" }
                        }
                    }
                }
            }
        }
    }
}

/// Render Lucide icon for navigation location
fn render_nav_icon(location: NavLocation) -> Element {
    match location {
        NavLocation::Home => rsx! {
            // Lucide house icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
                polyline { points: "9 22 9 12 15 12 15 22" }
            }
        },
        NavLocation::Deals => rsx! {
            // Lucide tag icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M12.586 2.586A2 2 0 0 0 11.172 2H4a2 2 0 0 0-2 2v7.172a2 2 0 0 0 .586 1.414l8.704 8.704a2.426 2.426 0 0 0 3.42 0l6.58-6.58a2.426 2.426 0 0 0 0-3.42z" }
                circle { cx: "7.5", cy: "7.5", r: ".5", fill: "currentColor" }
            }
        },
    }
}
