use super::config::{CatalogServiceConfig, ConnectorConfig};
use super::errors::ConnectorError;
use crate::models::{Listing, Product};
use actix_web::web::{self, Bytes};
use async_trait::async_trait;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

/// What to ask the catalog for. Each selector maps to exactly one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogResource {
    Listing { limit: u32 },
    Product { id: String },
    Category { slug: String },
    CategoryList,
}

impl CatalogResource {
    pub fn path(&self) -> String {
        match self {
            Self::Listing { limit } => format!("/products?limit={}", limit),
            Self::Product { id } => format!("/products/{}", encode_segment(id)),
            Self::Category { slug } => format!("/products/category/{}", encode_segment(slug)),
            Self::CategoryList => "/products/category-list".to_string(),
        }
    }
}

impl fmt::Display for CatalogResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing { limit } => write!(f, "listing(limit={})", limit),
            Self::Product { id } => write!(f, "product({})", id),
            Self::Category { slug } => write!(f, "category({})", slug),
            Self::CategoryList => write!(f, "category-list"),
        }
    }
}

fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Raw upstream body, already checked to be well-formed JSON.
///
/// Proxies re-emit `bytes` untouched; pages call [`UpstreamBody::decode`].
#[derive(Debug, Clone)]
pub struct UpstreamBody {
    bytes: Bytes,
}

impl UpstreamBody {
    pub fn new(bytes: Bytes) -> Result<Self, ConnectorError> {
        serde_json::from_slice::<IgnoredAny>(&bytes)?;
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ConnectorError> {
        serde_json::from_slice(&self.bytes).map_err(ConnectorError::from)
    }
}

#[async_trait]
pub trait CatalogConnector: Send + Sync {
    /// Issue the single GET for `resource` and return its body unchanged.
    async fn fetch(&self, resource: &CatalogResource) -> Result<UpstreamBody, ConnectorError>;

    /// Base URL the browser uses when it talks to the catalog directly.
    fn public_base_url(&self) -> &str;

    async fn list_products(&self, limit: u32) -> Result<Listing, ConnectorError> {
        self.fetch(&CatalogResource::Listing { limit }).await?.decode()
    }

    async fn get_product(&self, id: &str) -> Result<Product, ConnectorError> {
        self.fetch(&CatalogResource::Product { id: id.to_string() })
            .await?
            .decode()
    }

    async fn products_by_category(&self, slug: &str) -> Result<Listing, ConnectorError> {
        self.fetch(&CatalogResource::Category {
            slug: slug.to_string(),
        })
        .await?
        .decode()
    }

    async fn category_list(&self) -> Result<Vec<String>, ConnectorError> {
        self.fetch(&CatalogResource::CategoryList).await?.decode()
    }
}

pub struct CatalogServiceClient {
    base_url: String,
    http_client: reqwest::Client,
    user_agent: String,
}

impl CatalogServiceClient {
    pub fn new(config: &CatalogServiceConfig) -> Result<Self, ConnectorError> {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ConnectorError::HttpError(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            user_agent: format!("catalog-demo/{}", env!("CARGO_PKG_VERSION")),
        })
    }
}

#[async_trait]
impl CatalogConnector for CatalogServiceClient {
    async fn fetch(&self, resource: &CatalogResource) -> Result<UpstreamBody, ConnectorError> {
        let path = resource.path();
        let span = tracing::info_span!("upstream_http_request", %resource, path = %path);

        async {
            let resp = self
                .http_client
                .get(format!("{}{}", self.base_url, path))
                .header("User-Agent", &self.user_agent)
                .send()
                .await?;

            let status = resp.status();
            let bytes = resp
                .bytes()
                .await
                .map_err(|err| ConnectorError::HttpError(err.to_string()))?;

            if !status.is_success() {
                return Err(ConnectorError::Status {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                });
            }

            tracing::debug!(status = status.as_u16(), size = bytes.len(), "upstream responded");
            UpstreamBody::new(bytes)
        }
        .instrument(span)
        .await
    }

    fn public_base_url(&self) -> &str {
        &self.base_url
    }
}

/// Initialize the catalog connector from app settings
pub fn init(connector_config: &ConnectorConfig) -> web::Data<Arc<dyn CatalogConnector>> {
    let config = connector_config.catalog_service.clone().unwrap_or_default();

    let connector: Arc<dyn CatalogConnector> = if config.enabled {
        match CatalogServiceClient::new(&config) {
            Ok(client) => {
                tracing::info!("Catalog connector initialized ({})", config.base_url);
                Arc::new(client)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "Failed to initialize catalog connector, falling back to mock"
                );
                Arc::new(mock::MockCatalogConnector::default())
            }
        }
    } else {
        tracing::warn!("Catalog connector disabled - serving built-in fixtures");
        Arc::new(mock::MockCatalogConnector::default())
    };

    web::Data::new(connector)
}

pub mod mock {
    use super::*;
    use crate::models::{Dimensions, Meta, Review};

    /// Fixture catalog with two categories and three products.
    pub struct MockCatalogConnector {
        products: Vec<Product>,
        categories: Vec<String>,
        failing: bool,
    }

    impl Default for MockCatalogConnector {
        fn default() -> Self {
            Self {
                products: vec![
                    fixture_product(1, "Essence Mascara Lash Princess", "beauty", 9.99, 7.17, 5),
                    fixture_product(2, "Eyeshadow Palette with Mirror", "beauty", 19.99, 0.0, 44),
                    fixture_product(11, "Annibale Colombo Bed", "furniture", 1899.99, 8.09, 88),
                ],
                categories: vec!["beauty".to_string(), "furniture".to_string()],
                failing: false,
            }
        }
    }

    impl MockCatalogConnector {
        /// Every fetch fails as if upstream answered 500.
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn with_categories(categories: Vec<String>) -> Self {
            Self {
                categories,
                ..Self::default()
            }
        }

        fn listing(products: Vec<Product>, limit: usize) -> Listing {
            let total = products.len() as u64;
            let products: Vec<Product> = products.into_iter().take(limit).collect();
            Listing {
                limit: products.len() as u64,
                products,
                total,
                skip: 0,
            }
        }

        fn body<T: serde::Serialize>(value: &T) -> Result<UpstreamBody, ConnectorError> {
            let bytes = serde_json::to_vec(value)?;
            UpstreamBody::new(Bytes::from(bytes))
        }

        fn not_found(what: String) -> ConnectorError {
            ConnectorError::Status {
                status: 404,
                body: format!("{{\"message\":\"{} not found\"}}", what),
            }
        }
    }

    #[async_trait]
    impl CatalogConnector for MockCatalogConnector {
        async fn fetch(&self, resource: &CatalogResource) -> Result<UpstreamBody, ConnectorError> {
            if self.failing {
                return Err(ConnectorError::Status {
                    status: 500,
                    body: "{\"message\":\"upstream unavailable\"}".to_string(),
                });
            }

            match resource {
                CatalogResource::Listing { limit } => {
                    Self::body(&Self::listing(self.products.clone(), *limit as usize))
                }
                CatalogResource::Product { id } => self
                    .products
                    .iter()
                    .find(|product| product.id.to_string() == *id)
                    .ok_or_else(|| Self::not_found(format!("Product with id '{}'", id)))
                    .and_then(Self::body),
                CatalogResource::Category { slug } => {
                    let products: Vec<Product> = self
                        .products
                        .iter()
                        .filter(|product| product.category == *slug)
                        .cloned()
                        .collect();
                    let limit = products.len();
                    Self::body(&Self::listing(products, limit))
                }
                CatalogResource::CategoryList => Self::body(&self.categories),
            }
        }

        fn public_base_url(&self) -> &str {
            "https://dummyjson.com"
        }
    }

    pub fn fixture_product(
        id: i64,
        title: &str,
        category: &str,
        price: f64,
        discount_percentage: f64,
        stock: i64,
    ) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: format!("{} from the fixture catalog.", title),
            price,
            discount_percentage,
            rating: 4.5,
            stock,
            brand: Some("Fixture".to_string()),
            category: category.to_string(),
            thumbnail: format!("https://cdn.dummyjson.com/products/images/{}/{}/thumbnail.png", category, id),
            images: vec![
                format!("https://cdn.dummyjson.com/products/images/{}/{}/1.png", category, id),
                format!("https://cdn.dummyjson.com/products/images/{}/{}/2.png", category, id),
            ],
            tags: vec![category.to_string()],
            sku: Some(format!("FIX-{:04}", id)),
            weight: Some(2.0),
            dimensions: Some(Dimensions {
                width: 10.0,
                height: 12.5,
                depth: 3.0,
            }),
            warranty_information: Some("1 year warranty".to_string()),
            shipping_information: Some("Ships in 1 week".to_string()),
            availability_status: Some("In Stock".to_string()),
            return_policy: Some("30 days return policy".to_string()),
            minimum_order_quantity: Some(1),
            reviews: vec![Review {
                rating: 5.0,
                comment: "Would buy again!".to_string(),
                date: "2024-05-23T08:56:21.618Z".to_string(),
                reviewer_name: "Lucas Gordon".to_string(),
                reviewer_email: Some("lucas.gordon@x.dummyjson.com".to_string()),
            }],
            meta: Some(Meta {
                created_at: Some("2024-05-23T08:56:21.618Z".to_string()),
                updated_at: Some("2024-05-23T08:56:21.618Z".to_string()),
                barcode: Some("9164035109868".to_string()),
                qr_code: Some("https://assets.dummyjson.com/public/qr-code.png".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CatalogServiceClient {
        let config = CatalogServiceConfig {
            base_url: server.uri(),
            ..CatalogServiceConfig::default()
        };
        CatalogServiceClient::new(&config).unwrap()
    }

    #[test]
    fn resources_map_to_upstream_paths() {
        assert_eq!(CatalogResource::Listing { limit: 36 }.path(), "/products?limit=36");
        assert_eq!(
            CatalogResource::Product { id: "7".to_string() }.path(),
            "/products/7"
        );
        assert_eq!(
            CatalogResource::Category { slug: "home-decoration".to_string() }.path(),
            "/products/category/home-decoration"
        );
        assert_eq!(CatalogResource::CategoryList.path(), "/products/category-list");
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let resource = CatalogResource::Category {
            slug: "a/b c".to_string(),
        };
        assert_eq!(resource.path(), "/products/category/a%2Fb%20c");
    }

    #[test]
    fn upstream_body_rejects_invalid_json() {
        assert!(UpstreamBody::new(Bytes::from_static(b"<html>oops</html>")).is_err());
        assert!(UpstreamBody::new(Bytes::from_static(b"[\"beauty\"]")).is_ok());
    }

    #[tokio::test]
    async fn fetch_returns_body_unchanged() {
        let server = MockServer::start().await;
        let raw = r#"{"id":7,  "title":"Spaced   out"}"#;
        Mock::given(method("GET"))
            .and(path("/products/7"))
            .respond_with(ResponseTemplate::new(200).set_body_string(raw))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .fetch(&CatalogResource::Product { id: "7".to_string() })
            .await
            .unwrap();
        assert_eq!(body.bytes().as_ref(), raw.as_bytes());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/9999"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"not found"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).get_product("9999").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[tokio::test]
    async fn server_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/category-list"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client_for(&server).category_list().await.is_err());
    }

    #[tokio::test]
    async fn invalid_json_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .and(query_param("limit", "36"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_products(36).await.unwrap_err();
        assert!(matches!(err, ConnectorError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_error() {
        let config = CatalogServiceConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
            ..CatalogServiceConfig::default()
        };
        let client = CatalogServiceClient::new(&config).unwrap();
        let err = client.category_list().await.unwrap_err();
        assert!(matches!(err, ConnectorError::HttpError(_)));
    }

    #[tokio::test]
    async fn mock_listing_honours_limit() {
        let connector = mock::MockCatalogConnector::default();
        let listing = connector.list_products(2).await.unwrap();
        assert_eq!(listing.products.len(), 2);
        assert_eq!(listing.total, 3);
    }

    #[tokio::test]
    async fn mock_unknown_product_is_not_found() {
        let connector = mock::MockCatalogConnector::default();
        let err = connector.get_product("404").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
