//! External Service Connectors
//!
//! Adapters for the services this app talks to over HTTP: the upstream product
//! catalog and this service's own JSON API (used by the server-rendered page).
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `{service}.rs` → allows mocking in tests
//! 2. Implement HTTP client in same file
//! 3. Configuration in `config.rs` → enable/disable per environment
//! 4. Inject trait object into routes → routes never depend on HTTP implementation
//!
//! ## Usage in Routes
//!
//! ```ignore
//! pub async fn handler(
//!     catalog: web::Data<Arc<dyn CatalogConnector>>,
//! ) -> HttpResponse {
//!     match catalog.fetch(&CatalogResource::CategoryList).await { ... }
//! }
//! ```

pub mod catalog_service;
pub mod config;
pub mod errors;
pub mod site_api;

pub use catalog_service::{
    CatalogConnector, CatalogResource, CatalogServiceClient, UpstreamBody,
};
pub use config::{CatalogServiceConfig, ConnectorConfig};
pub use errors::ConnectorError;
pub use site_api::{SiteApiClient, SiteApiConnector};

pub use catalog_service::init as init_catalog_service;
pub use site_api::init as init_site_api;
