use dioxus::prelude::*;

use super::Header;

/// Landing page for the listing route. The catalog grid lives elsewhere; this only anchors navigation.
#[component]
pub fn Products() -> Element {
    rsx! {
        div { class: "products-container",
            Header {}
            h1 { class: "products-heading", "All Products" }
        }
    }
}
