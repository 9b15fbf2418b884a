use dioxus::prelude::*;

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { "data-testid": "loader", class: "products-loader-container",
            div { class: "three-dots",
                span {}
                span {}
                span {}
            }
        }
    }
}
