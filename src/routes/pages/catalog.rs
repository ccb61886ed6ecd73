//! Category pages that are pre-rendered by `prerender` and revalidated on
//! the schedule in [`crate::cache_policy`].

use crate::cache_policy::RouteKind;
use crate::connectors::{CatalogConnector, ConnectorError};
use crate::helpers::HtmlResponse;
use crate::models::{Category, Listing};
use crate::views::{PageRenderer, PageState};
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ProductPath {
    pub category: String,
    pub id: String,
}

/// Category index. A failed fetch shows the empty state.
pub async fn category_index_state(catalog: &dyn CatalogConnector) -> PageState<Vec<Category>> {
    let categories = match catalog.category_list().await {
        Ok(slugs) => slugs.into_iter().map(Category::from_slug).collect(),
        Err(err) => {
            tracing::error!("Error fetching categories: {:?}", err);
            Vec::new()
        }
    };
    PageState::Loading.settle(Ok::<_, ConnectorError>(categories))
}

/// Products of one category. A failed fetch shows an empty listing.
pub async fn category_products_state(
    catalog: &dyn CatalogConnector,
    category: &str,
) -> PageState<Listing> {
    let listing = match catalog.products_by_category(category).await {
        Ok(listing) => {
            if listing.is_empty() {
                tracing::info!(category = %category, "Category has no products");
            }
            listing
        }
        Err(err) => {
            tracing::error!("Error fetching products for category {}: {:?}", category, err);
            Listing::empty()
        }
    };
    PageState::Loading.settle(Ok::<_, ConnectorError>(listing))
}

#[tracing::instrument(name = "Category index page", skip_all)]
#[get("/ui/ex4")]
pub async fn index_page(
    renderer: web::Data<PageRenderer>,
    catalog: web::Data<Arc<dyn CatalogConnector>>,
) -> HttpResponse {
    let state = category_index_state(catalog.get_ref().as_ref()).await;
    match renderer.category_index(&state) {
        Ok(html) => HtmlResponse::page(
            StatusCode::OK,
            html,
            Some(RouteKind::CategoryIndex.directive()),
        ),
        Err(err) => HtmlResponse::render_failed(err),
    }
}

#[tracing::instrument(name = "Category products page", skip(renderer, catalog))]
#[get("/ui/ex4/{category}")]
pub async fn category_page(
    renderer: web::Data<PageRenderer>,
    catalog: web::Data<Arc<dyn CatalogConnector>>,
    path: web::Path<String>,
) -> HttpResponse {
    let category = path.into_inner();
    let state = category_products_state(catalog.get_ref().as_ref(), &category).await;
    match renderer.category_products(&category, &state) {
        Ok(html) => HtmlResponse::page(
            StatusCode::OK,
            html,
            Some(RouteKind::RenderedPage.directive()),
        ),
        Err(err) => HtmlResponse::render_failed(err),
    }
}

#[tracing::instrument(name = "Category product page", skip(renderer, catalog))]
#[get("/ui/ex4/{category}/{id}")]
pub async fn product_page(
    renderer: web::Data<PageRenderer>,
    catalog: web::Data<Arc<dyn CatalogConnector>>,
    path: web::Path<ProductPath>,
) -> HttpResponse {
    let ProductPath { category, id } = path.into_inner();
    let result = catalog.get_product(&id).await;
    if let Err(err) = &result {
        tracing::error!("Error fetching product {}: {:?}", id, err);
    }
    let state = PageState::Loading.settle(result);

    let (status, directive) = if state.loaded().is_some() {
        (StatusCode::OK, Some(RouteKind::RenderedPage.directive()))
    } else {
        (StatusCode::NOT_FOUND, None)
    };
    match renderer.category_product(&category, &state) {
        Ok(html) => HtmlResponse::page(status, html, directive),
        Err(err) => HtmlResponse::render_failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::catalog_service::mock::MockCatalogConnector;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn products_state_is_scoped_to_the_requested_category() {
        let catalog = MockCatalogConnector::default();

        let state = category_products_state(&catalog, "furniture").await;
        let listing = state.loaded().unwrap();
        assert_eq!(listing.products.len(), 1);
        assert_eq!(listing.products[0].category, "furniture");

        let state = category_products_state(&catalog, "groceries").await;
        assert!(state.loaded().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn category_and_product_pages_resolve_path_segments() {
        let catalog: Arc<dyn CatalogConnector> = Arc::new(MockCatalogConnector::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(PageRenderer::new().unwrap()))
                .app_data(web::Data::new(catalog))
                .service(category_page)
                .service(product_page),
        )
        .await;

        let req = test::TestRequest::get().uri("/ui/ex4/furniture").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Annibale Colombo Bed"));

        let req = test::TestRequest::get().uri("/ui/ex4/furniture/11").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Annibale Colombo Bed"));

        let req = test::TestRequest::get().uri("/ui/ex4/furniture/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
