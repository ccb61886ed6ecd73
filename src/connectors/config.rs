use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub catalog_service: Option<CatalogServiceConfig>,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            catalog_service: Some(CatalogServiceConfig::default()),
        }
    }
}

/// Product catalog connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogServiceConfig {
    /// Enable/disable the upstream catalog; disabled serves the built-in fixtures
    #[serde(default = "CatalogServiceConfig::default_enabled")]
    pub enabled: bool,
    /// Base URL for the catalog API (e.g., https://dummyjson.com)
    #[serde(default = "CatalogServiceConfig::default_base_url")]
    pub base_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "CatalogServiceConfig::default_timeout")]
    pub timeout_secs: u64,
    /// Fixed page size for the proxied listing (/api/ex2)
    #[serde(default = "CatalogServiceConfig::default_listing_limit")]
    pub listing_limit: u32,
    /// Fixed page size for the listing the browser fetches directly (/ui/ex1)
    #[serde(default = "CatalogServiceConfig::default_direct_listing_limit")]
    pub direct_listing_limit: u32,
}

impl CatalogServiceConfig {
    const fn default_enabled() -> bool {
        true
    }

    fn default_base_url() -> String {
        "https://dummyjson.com".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    const fn default_listing_limit() -> u32 {
        36
    }

    const fn default_direct_listing_limit() -> u32 {
        24
    }
}

impl Default for CatalogServiceConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout(),
            listing_limit: Self::default_listing_limit(),
            direct_listing_limit: Self::default_direct_listing_limit(),
        }
    }
}
