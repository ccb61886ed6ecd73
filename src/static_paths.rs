use crate::connectors::CatalogConnector;
use serde::{Deserialize, Serialize};

/// Route parameter for one pre-rendered `/ui/ex4/{category}` page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryParam {
    pub category: String,
}

/// Fetches the category list once and returns one parameter per category,
/// in upstream order. Any failure degrades to no pre-rendered pages.
#[tracing::instrument(name = "Enumerate static category paths", skip(catalog))]
pub async fn category_params(catalog: &dyn CatalogConnector) -> Vec<CategoryParam> {
    match catalog.category_list().await {
        Ok(categories) => {
            tracing::info!(count = categories.len(), "Enumerated static category paths");
            categories
                .into_iter()
                .map(|category| CategoryParam { category })
                .collect()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to generate static params");
            Vec::new()
        }
    }
}
