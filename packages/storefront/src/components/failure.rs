use dioxus::prelude::*;

use crate::Route;

const FAILURE_IMAGE: &str = "https://assets.ccbp.in/frontend/react-js/nxt-trendz-error-view-img.png";

/// Shown for every failed fetch, whether the product is missing or the api is down.
#[component]
pub fn FailureView() -> Element {
    rsx! {
        div { class: "failure-container",
            img { src: FAILURE_IMAGE, class: "failure-image", alt: "failure view" }
            h1 { class: "not-found-name", "Product Not Found" }
            Link { to: Route::Products {},
                button { class: "button", r#type: "button", "Continue Shopping" }
            }
        }
    }
}
