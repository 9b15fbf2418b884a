use dioxus::prelude::*;

use crate::api::ProductClient;
use crate::config::StorefrontConfig;
use crate::credentials::Credentials;
use crate::Route;

mod failure;
mod header;
mod loading;
mod product_item_details;
mod products;
mod quantity;
mod similar_product_item;

pub use failure::FailureView;
pub use header::Header;
pub use loading::LoadingView;
pub use product_item_details::{ProductDetailsView, ProductItemDetails};
pub use products::Products;
pub use quantity::QuantityControl;
pub use similar_product_item::SimilarProductItem;

const STYLE: Asset = asset!("/assets/main.css");

pub(crate) const STAR_ICON: &str = "https://assets.ccbp.in/frontend/react-js/star-img.png";

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        try_consume_context::<StorefrontConfig>()
            .map(Ok)
            .unwrap_or_else(StorefrontConfig::from_env)
    });

    match config {
        Ok(config) => rsx! {
            document::Stylesheet { href: STYLE }
            Storefront { config }
        },
        Err(err) => rsx! {
            p { class: "config-error", "The storefront is misconfigured: {err}" }
        },
    }
}

#[component]
fn Storefront(config: StorefrontConfig) -> Element {
    use_context_provider(|| ProductClient::http(config.api_base.clone()));
    use_context_provider(|| credentials_for(&config));

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(target_arch = "wasm32")]
fn credentials_for(_config: &StorefrontConfig) -> Credentials {
    Credentials::new(crate::credentials::BrowserCookies)
}

#[cfg(not(target_arch = "wasm32"))]
fn credentials_for(config: &StorefrontConfig) -> Credentials {
    Credentials::new(crate::credentials::StaticToken::from(config.token.clone()))
}
