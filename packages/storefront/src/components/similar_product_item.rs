use dioxus::prelude::*;

use crate::api::ProductRecord;

use super::STAR_ICON;

#[component]
pub fn SimilarProductItem(product: ProductRecord) -> Element {
    rsx! {
        li { class: "similar-product-item",
            img {
                src: "{product.image_url}",
                class: "similar-product-img",
                alt: "similar product {product.title}",
            }
            p { class: "similar-product-title", "{product.title}" }
            p { class: "similar-products-brand", "by {product.brand}" }
            div { class: "similar-product-price-rating-container",
                p { class: "similar-product-price", "Rs {product.price}/-" }
                div { class: "similar-product-rating-container",
                    p { class: "similar-product-rating", "{product.rating}" }
                    img { src: STAR_ICON, class: "similar-product-star", alt: "star" }
                }
            }
        }
    }
}
