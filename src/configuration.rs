use crate::connectors::{CatalogServiceConfig, ConnectorConfig};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    /// Public address of this service, used by pages that call our own API.
    pub base_url: String,
    #[serde(default)]
    pub connectors: ConnectorConfig,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }

    pub fn catalog(&self) -> CatalogServiceConfig {
        self.connectors.catalog_service.clone().unwrap_or_default()
    }

    fn apply_env_overrides(&mut self) {
        let public = std::env::var("PUBLIC_BASE_URL").ok();
        self.base_url = resolve_base_url(&self.base_url, public.as_deref());
    }
}

/// A non-blank `PUBLIC_BASE_URL` wins over the configured value; either way
/// the trailing `/` is dropped.
fn resolve_base_url(configured: &str, public: Option<&str>) -> String {
    let base_url = match public {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => configured,
    };
    base_url.trim_end_matches('/').to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml in the working directory (.json, .toml, .yaml, .yml)
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;
    config.apply_env_overrides();

    Ok(config)
}
