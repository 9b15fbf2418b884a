use dioxus::prelude::*;

use crate::Route;

const LOGO: &str = "https://assets.ccbp.in/frontend/react-js/nxt-trendz-logo-img.png";

#[component]
pub fn Header() -> Element {
    rsx! {
        nav { class: "nav-header",
            div { class: "nav-content",
                Link { to: Route::Products {},
                    img { class: "website-logo", src: LOGO, alt: "website logo" }
                }
                ul { class: "nav-menu",
                    li { class: "nav-menu-item",
                        Link { to: Route::Products {}, "Products" }
                    }
                }
            }
        }
    }
}
