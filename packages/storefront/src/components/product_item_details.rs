use dioxus::prelude::*;

use crate::api::{ProductClient, ProductRecord};
use crate::credentials::Credentials;
use crate::state::{Action, FetchStatus, Quantity, ViewState};

use super::{FailureView, Header, LoadingView, QuantityControl, SimilarProductItem, STAR_ICON};

/// The detail page for one product.
///
/// The fetch reads `id`, so it runs on mount and again whenever the router hands this page a new id. A
/// restart drops the previous fetch, and the page's tasks are dropped with it on unmount, so a late response
/// never reaches the state.
#[component]
pub fn ProductItemDetails(id: ReadSignal<String>) -> Element {
    let client = use_context::<ProductClient>();
    let credentials = use_context::<Credentials>();
    let mut state = use_signal(ViewState::loading);

    let _fetch = use_resource(move || {
        let id = id();
        let client = client.clone();
        let credentials = credentials.clone();
        async move {
            if state.peek().status != FetchStatus::InProgress {
                tracing::debug!(product = %id, "route changed, reloading product");
                state.set(ViewState::loading());
            }

            let token = credentials.bearer_token();
            let action = match client.fetch_product(&id, token.as_deref()).await {
                Ok(details) => Action::Loaded(details),
                Err(err) => {
                    tracing::warn!(product = %id, "failed to load product: {err}");
                    Action::Failed(err.reason())
                }
            };
            state.write().reduce(action);
        }
    });

    let view = state.read();
    let body = match (view.status, &view.product) {
        (FetchStatus::InProgress, _) => rsx! { LoadingView {} },
        (FetchStatus::Success, Some(product)) => rsx! {
            ProductDetailsView {
                product: product.clone(),
                similar_products: view.similar_products.clone(),
                quantity: view.quantity,
                on_decrement: move |_| state.write().reduce(Action::Decrement),
                on_increment: move |_| state.write().reduce(Action::Increment),
            }
        },
        (FetchStatus::Failure, _) => rsx! { FailureView {} },
        (FetchStatus::Initial, _) | (FetchStatus::Success, None) => rsx! {},
    };

    rsx! {
        div { class: "product-item-container",
            Header {}
            div { {body} }
        }
    }
}

#[component]
pub fn ProductDetailsView(
    product: ProductRecord,
    similar_products: Vec<ProductRecord>,
    quantity: Quantity,
    on_decrement: EventHandler<MouseEvent>,
    on_increment: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "product-details-view",
            div { class: "img-container",
                img { src: "{product.image_url}", class: "product-img", alt: "product" }
            }
            div { class: "product-details",
                h1 { class: "product-name", "{product.title}" }
                p { class: "price", "Rs {product.price}/-" }
                div { class: "rating-container",
                    div { class: "rating-badge",
                        p { class: "rating", "{product.rating}" }
                        img { src: STAR_ICON, class: "rating-icon", alt: "star" }
                    }
                    p { class: "review-text", "{product.total_reviews} Reviews" }
                }
                p { class: "description", "{product.description}" }
                p { class: "stock-availability",
                    span { class: "highlight-text", "Available: " }
                    "{product.availability}"
                }
                p { class: "stock-availability",
                    span { class: "highlight-text", "Brand: " }
                    "{product.brand}"
                }
                hr { class: "line" }
                QuantityControl { quantity, on_decrement, on_increment }
                button { class: "button", r#type: "button", "ADD TO CART" }
            }
        }
        div { class: "similar-products-section",
            h1 { class: "similar-products-heading", "Similar Products" }
            ul { class: "similar-products-list",
                for item in similar_products {
                    SimilarProductItem { key: "{item.id}", product: item }
                }
            }
        }
    }
}
