mod common;

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn product_body_is_relayed_byte_for_byte() {
    let app = common::spawn_app().await;
    let raw = serde_json::to_string_pretty(&common::product_json(5, "beauty")).unwrap();

    Mock::given(method("GET"))
        .and(path("/products/5"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw.clone(), "application/json"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = reqwest::get(format!("{}/api/ex2/5", app.address))
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["cache-control"],
        "public, s-maxage=60, stale-while-revalidate=300"
    );
    assert_eq!(response.text().await.unwrap(), raw);
}

#[tokio::test]
async fn upstream_error_becomes_generic_500() {
    let app = common::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/products/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\":\"not found\"}"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = reqwest::get(format!("{}/api/ex2/999", app.address))
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "Failed to fetch product"}));
}

#[tokio::test]
async fn listing_requests_fixed_limit_and_products_are_complete() {
    let app = common::spawn_app().await;
    let products: Vec<Value> = (1..=36).map(|id| common::product_json(id, "beauty")).collect();

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("limit", "36"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listing_json(products, 194, 36)))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = reqwest::get(format!("{}/api/ex2", app.address))
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);

    let listing: catalog_demo::models::Listing = response.json().await.unwrap();
    assert!(listing.products.len() <= 36);
    assert_eq!(listing.total, 194);
    assert!(listing.products.iter().all(|p| !p.title.is_empty() && !p.images.is_empty()));
}

#[tokio::test]
async fn category_routes_use_long_lived_directive() {
    let app = common::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/products/category-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec!["beauty", "home-decoration"]))
        .mount(&app.upstream)
        .await;

    let response = reqwest::get(format!("{}/api/ex4", app.address)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["cache-control"],
        "public, s-maxage=3600, stale-while-revalidate=86400"
    );
    let slugs: Vec<String> = response.json().await.unwrap();
    assert_eq!(slugs, vec!["beauty", "home-decoration"]);

    let response = reqwest::get(format!("{}/api/ex3", app.address)).await.unwrap();
    let named: Value = response.json().await.unwrap();
    assert_eq!(named[1]["name"], "Home Decoration");
    assert_eq!(named[1]["url"], "/ui/ex4/home-decoration");
}

#[tokio::test]
async fn category_failure_names_the_category() {
    let app = common::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/products/category/laptops"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = reqwest::get(format!("{}/api/ex4/laptops", app.address))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({"error": "Failed to fetch products for category: laptops"})
    );
}
