use crate::cache_policy::RouteKind;
use crate::connectors::{CatalogConnector, CatalogResource};
use crate::helpers::JsonResponse;
use crate::models::Category;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

/// Category list with display names and page links, consumed by `/ui/ex3`.
#[tracing::instrument(name = "List categories", skip(catalog))]
#[get("/ex3")]
pub async fn list_named(catalog: web::Data<Arc<dyn CatalogConnector>>) -> HttpResponse {
    match catalog.category_list().await {
        Ok(slugs) => {
            let categories: Vec<Category> = slugs.into_iter().map(Category::from_slug).collect();
            JsonResponse::ok(&categories, RouteKind::CategoryProxy.directive())
        }
        Err(err) => {
            tracing::error!("Error fetching categories: {:?}", err);
            JsonResponse::internal_error("Failed to fetch categories")
        }
    }
}

#[tracing::instrument(name = "Proxy category list", skip(catalog))]
#[get("/ex4")]
pub async fn list(catalog: web::Data<Arc<dyn CatalogConnector>>) -> HttpResponse {
    match catalog.fetch(&CatalogResource::CategoryList).await {
        Ok(body) => JsonResponse::passthrough(body, RouteKind::CategoryProxy.directive()),
        Err(err) => {
            tracing::error!("Error fetching categories: {:?}", err);
            JsonResponse::internal_error("Failed to fetch categories")
        }
    }
}

#[tracing::instrument(name = "Proxy category products", skip(catalog))]
#[get("/ex4/{category}")]
pub async fn products(
    catalog: web::Data<Arc<dyn CatalogConnector>>,
    path: web::Path<String>,
) -> HttpResponse {
    let slug = path.into_inner();
    let resource = CatalogResource::Category { slug: slug.clone() };
    match catalog.fetch(&resource).await {
        Ok(body) => JsonResponse::passthrough(body, RouteKind::CategoryProxy.directive()),
        Err(err) => {
            tracing::error!("Error fetching products for category {}: {:?}", slug, err);
            JsonResponse::internal_error(format!(
                "Failed to fetch products for category: {}",
                slug
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::catalog_service::mock::MockCatalogConnector;
    use actix_web::http::header::CACHE_CONTROL;
    use actix_web::{http::StatusCode, test, App};

    fn catalog(connector: MockCatalogConnector) -> web::Data<Arc<dyn CatalogConnector>> {
        let connector: Arc<dyn CatalogConnector> = Arc::new(connector);
        web::Data::new(connector)
    }

    #[actix_web::test]
    async fn category_list_is_proxied_with_long_cache_header() {
        let app = test::init_service(
            App::new()
                .app_data(catalog(MockCatalogConnector::default()))
                .service(web::scope("/api").service(list)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/ex4").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(CACHE_CONTROL).unwrap(),
            "public, s-maxage=3600, stale-while-revalidate=86400"
        );
        let body: Vec<String> = test::read_body_json(resp).await;
        assert_eq!(body, vec!["beauty", "furniture"]);
    }

    #[actix_web::test]
    async fn named_categories_carry_display_name_and_link() {
        let app = test::init_service(
            App::new()
                .app_data(catalog(MockCatalogConnector::with_categories(vec![
                    "home-decoration".to_string(),
                ])))
                .service(web::scope("/api").service(list_named)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/ex3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!([{
                "slug": "home-decoration",
                "name": "Home Decoration",
                "url": "/ui/ex4/home-decoration"
            }])
        );
    }

    #[actix_web::test]
    async fn category_products_are_filtered_upstream() {
        let app = test::init_service(
            App::new()
                .app_data(catalog(MockCatalogConnector::default()))
                .service(web::scope("/api").service(products)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/ex4/beauty").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["products"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn category_failure_names_the_category() {
        let app = test::init_service(
            App::new()
                .app_data(catalog(MockCatalogConnector::failing()))
                .service(web::scope("/api").service(products).service(list_named)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/ex4/laptops").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({"error": "Failed to fetch products for category: laptops"})
        );

        let req = test::TestRequest::get().uri("/api/ex3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"error": "Failed to fetch categories"}));
    }
}
