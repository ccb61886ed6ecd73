use crate::cache_policy::RouteKind;
use crate::connectors::{CatalogConnector, CatalogResource, CatalogServiceConfig};
use crate::helpers::JsonResponse;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "Proxy product listing", skip(catalog, config))]
#[get("/ex2")]
pub async fn list(
    catalog: web::Data<Arc<dyn CatalogConnector>>,
    config: web::Data<CatalogServiceConfig>,
) -> HttpResponse {
    let resource = CatalogResource::Listing {
        limit: config.listing_limit,
    };
    match catalog.fetch(&resource).await {
        Ok(body) => JsonResponse::passthrough(body, RouteKind::ProductProxy.directive()),
        Err(err) => {
            tracing::error!("Error fetching products: {:?}", err);
            JsonResponse::internal_error("Failed to fetch products")
        }
    }
}

#[tracing::instrument(name = "Proxy product", skip(catalog))]
#[get("/ex2/{id}")]
pub async fn item(
    catalog: web::Data<Arc<dyn CatalogConnector>>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    match catalog.fetch(&CatalogResource::Product { id }).await {
        Ok(body) => JsonResponse::passthrough(body, RouteKind::ProductProxy.directive()),
        Err(err) => {
            tracing::error!("Error fetching product: {:?}", err);
            JsonResponse::internal_error("Failed to fetch product")
        }
    }
}
