//! Client for this service's own JSON API.
//!
//! The server-rendered categories page (`/ui/ex3`) deliberately goes through
//! `/api/ex3` over HTTP instead of calling the catalog directly, so it needs
//! the public base URL of the running service.

use super::errors::ConnectorError;
use crate::models::Category;
use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

pub const CATEGORIES_PATH: &str = "/api/ex3";

#[async_trait]
pub trait SiteApiConnector: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, ConnectorError>;
}

pub struct SiteApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl SiteApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ConnectorError::HttpError(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }
}

#[async_trait]
impl SiteApiConnector for SiteApiClient {
    async fn categories(&self) -> Result<Vec<Category>, ConnectorError> {
        let url = format!("{}{}", self.base_url, CATEGORIES_PATH);
        let span = tracing::info_span!("site_api_request", url = %url);

        async {
            let resp = self.http_client.get(&url).send().await?;
            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(ConnectorError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let text = resp
                .text()
                .await
                .map_err(|err| ConnectorError::HttpError(err.to_string()))?;
            serde_json::from_str::<Vec<Category>>(&text).map_err(ConnectorError::from)
        }
        .instrument(span)
        .await
    }
}

pub fn init(base_url: &str, timeout_secs: u64) -> Result<web::Data<Arc<dyn SiteApiConnector>>, ConnectorError> {
    let client = SiteApiClient::new(base_url, Duration::from_secs(timeout_secs.max(1)))?;
    tracing::info!("Site API connector initialized ({})", base_url);
    let connector: Arc<dyn SiteApiConnector> = Arc::new(client);
    Ok(web::Data::new(connector))
}

pub mod mock {
    use super::*;

    /// Serves a fixed category list, or fails every call with a 500.
    pub struct MockSiteApi {
        categories: Option<Vec<Category>>,
    }

    impl MockSiteApi {
        pub fn new(slugs: &[&str]) -> Self {
            Self {
                categories: Some(slugs.iter().map(|slug| Category::from_slug(*slug)).collect()),
            }
        }

        pub fn failing() -> Self {
            Self { categories: None }
        }
    }

    #[async_trait]
    impl SiteApiConnector for MockSiteApi {
        async fn categories(&self) -> Result<Vec<Category>, ConnectorError> {
            self.categories.clone().ok_or(ConnectorError::Status {
                status: 500,
                body: "{\"error\":\"Failed to fetch categories\"}".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn categories_are_read_from_own_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CATEGORIES_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"slug": "beauty", "name": "Beauty", "url": "/ui/ex4/beauty"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = SiteApiClient::new(&server.uri(), Duration::from_secs(2)).unwrap();
        let categories = client.categories().await.unwrap();
        assert_eq!(categories, vec![Category::from_slug("beauty")]);
    }

    #[tokio::test]
    async fn error_status_from_own_api_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CATEGORIES_PATH))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "Failed to fetch categories"})),
            )
            .mount(&server)
            .await;

        let client = SiteApiClient::new(&server.uri(), Duration::from_secs(2)).unwrap();
        let err = client.categories().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
