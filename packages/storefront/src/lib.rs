//! The storefront product detail page.
//!
//! [`App`] mounts a router with the listing and detail routes and provides the two services the detail page
//! pulls from context: a [`api::ProductClient`] and a [`credentials::Credentials`] store.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod credentials;
pub mod state;

pub use components::App;

use components::{ProductItemDetails, Products};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/products")]
    Products {},

    #[route("/products/:id")]
    ProductItemDetails { id: String },
}
