use std::rc::Rc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

/// A product as the page renders it.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub brand: String,
    pub image_url: String,
    pub total_reviews: u64,
    pub rating: f64,
    pub availability: String,
}

/// The normalized body of a successful `/products/{id}` response.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetails {
    pub product: ProductRecord,
    pub similar_products: Vec<ProductRecord>,
}

// The wire shapes are kept apart from the records so a server rename only touches these.
#[derive(Deserialize, Debug)]
struct ProductPayload {
    id: u64,
    title: String,
    price: f64,
    description: String,
    brand: String,
    image_url: String,
    total_reviews: u64,
    rating: f64,
    availability: String,
}

#[derive(Deserialize, Debug)]
struct ProductResponse {
    #[serde(flatten)]
    product: ProductPayload,
    #[serde(default)]
    similar_products: Vec<ProductPayload>,
}

impl From<ProductPayload> for ProductRecord {
    fn from(payload: ProductPayload) -> Self {
        ProductRecord {
            id: payload.id,
            title: payload.title,
            price: payload.price,
            description: payload.description,
            brand: payload.brand,
            image_url: payload.image_url,
            total_reviews: payload.total_reviews,
            rating: payload.rating,
            availability: payload.availability,
        }
    }
}

impl From<ProductResponse> for ProductDetails {
    fn from(response: ProductResponse) -> Self {
        ProductDetails {
            product: response.product.into(),
            similar_products: response
                .similar_products
                .into_iter()
                .map(ProductRecord::from)
                .collect(),
        }
    }
}

impl ProductDetails {
    /// Parses a success body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<ProductResponse>(body).map(Self::from)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("product not found")]
    NotFound,

    #[error("unexpected response status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed product payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("api base url cannot carry a path")]
    InvalidBase,
}

/// Why the page ended up on the failure view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    NotFound,
    Unavailable,
    Malformed,
}

impl FetchError {
    pub fn reason(&self) -> FailureReason {
        match self {
            FetchError::NotFound => FailureReason::NotFound,
            FetchError::Decode(_) => FailureReason::Malformed,
            FetchError::Status(_) | FetchError::Transport(_) | FetchError::InvalidBase => {
                FailureReason::Unavailable
            }
        }
    }
}

/// Source of product details for the page.
#[async_trait(?Send)]
pub trait ProductApi {
    async fn fetch_product(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<ProductDetails, FetchError>;
}

/// Fetches products from the storefront REST API.
#[derive(Clone, Debug)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpProductApi {
    pub fn new(base: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn product_url(&self, id: &str) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidBase)?
            .pop_if_empty()
            .push("products")
            .push(id);
        Ok(url)
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn fetch_product(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<ProductDetails, FetchError> {
        let url = self.product_url(id)?;
        let mut request = self.client.get(url);
        match token {
            Some(token) => request = request.bearer_auth(token),
            None => tracing::warn!(product = id, "no bearer token stored, requesting anonymously"),
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(ProductDetails::from_json(&body)?)
    }
}

/// The product source handed to the page through context.
#[derive(Clone)]
pub struct ProductClient(Rc<dyn ProductApi>);

impl ProductClient {
    pub fn new(api: Rc<dyn ProductApi>) -> Self {
        Self(api)
    }

    pub fn http(base: Url) -> Self {
        Self(Rc::new(HttpProductApi::new(base)))
    }

    pub async fn fetch_product(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<ProductDetails, FetchError> {
        self.0.fetch_product(id, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "id": 16,
        "image_url": "https://assets.example.com/products/wrist-watch.png",
        "title": "Embroidered Net Gown",
        "price": 62990,
        "description": "An elegant gown.",
        "brand": "Manyavar",
        "total_reviews": 120,
        "rating": 4.5,
        "availability": "In Stock",
        "similar_products": [
            {
                "id": 17,
                "image_url": "https://assets.example.com/products/saree.png",
                "title": "Silk Saree",
                "price": 3990,
                "description": "A silk saree.",
                "brand": "Mysore Silks",
                "total_reviews": 45,
                "rating": 3.9,
                "availability": "Out of Stock"
            },
            {
                "id": 18,
                "image_url": "https://assets.example.com/products/kurta.png",
                "title": "Cotton Kurta",
                "price": 1299,
                "description": "A cotton kurta.",
                "brand": "Fabindia",
                "total_reviews": 9,
                "rating": 4.1,
                "availability": "In Stock"
            }
        ]
    }"#;

    #[test]
    fn maps_server_fields() {
        let details = ProductDetails::from_json(FIXTURE).unwrap();

        assert_eq!(
            details.product,
            ProductRecord {
                id: 16,
                title: "Embroidered Net Gown".into(),
                price: 62990.0,
                description: "An elegant gown.".into(),
                brand: "Manyavar".into(),
                image_url: "https://assets.example.com/products/wrist-watch.png".into(),
                total_reviews: 120,
                rating: 4.5,
                availability: "In Stock".into(),
            }
        );
        assert_eq!(details.similar_products.len(), 2);
        assert_eq!(details.similar_products[0].id, 17);
        assert_eq!(
            details.similar_products[1].image_url,
            "https://assets.example.com/products/kurta.png"
        );
    }

    #[test]
    fn keeps_server_order() {
        let details = ProductDetails::from_json(FIXTURE).unwrap();
        let ids: Vec<_> = details.similar_products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![17, 18]);
    }

    #[test]
    fn missing_similar_products_is_empty() {
        let body = r#"{
            "id": 1, "image_url": "", "title": "t", "price": 1, "description": "",
            "brand": "b", "total_reviews": 0, "rating": 0, "availability": ""
        }"#;
        let details = ProductDetails::from_json(body).unwrap();
        assert!(details.similar_products.is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = ProductDetails::from_json(r#"{"id": "sixteen"}"#).unwrap_err();
        assert_eq!(FetchError::from(err).reason(), FailureReason::Malformed);
    }

    #[test]
    fn reasons() {
        assert_eq!(FetchError::NotFound.reason(), FailureReason::NotFound);
        assert_eq!(FetchError::Status(500).reason(), FailureReason::Unavailable);
        assert_eq!(FetchError::InvalidBase.reason(), FailureReason::Unavailable);
    }

    #[test]
    fn product_url_appends_segments() {
        let api = HttpProductApi::new(Url::parse("https://apis.example.com").unwrap());
        assert_eq!(
            api.product_url("16").unwrap().as_str(),
            "https://apis.example.com/products/16"
        );

        let api = HttpProductApi::new(Url::parse("https://example.com/api/").unwrap());
        assert_eq!(
            api.product_url("a b").unwrap().as_str(),
            "https://example.com/api/products/a%20b"
        );
    }

    #[test]
    fn product_url_rejects_opaque_bases() {
        let api = HttpProductApi::new(Url::parse("mailto:shop@example.com").unwrap());
        assert!(matches!(
            api.product_url("16"),
            Err(FetchError::InvalidBase)
        ));
    }
}
