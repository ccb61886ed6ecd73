use catalog_demo::configuration::get_configuration;
use serde_json::{json, Value};
use std::net::TcpListener;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub upstream: MockServer,
}

/// Start the server on a random port with the catalog pointed at a fresh
/// wiremock upstream and `base_url` pointed at the server itself.
pub async fn spawn_app() -> TestApp {
    let upstream = MockServer::start().await;
    let mut configuration = get_configuration().expect("Failed to get configuration");

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    configuration.base_url = address.clone();
    let mut catalog = configuration.catalog();
    catalog.enabled = true;
    catalog.base_url = upstream.uri();
    catalog.timeout_secs = 5;
    configuration.connectors.catalog_service = Some(catalog);

    let server = catalog_demo::startup::run(listener, configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp { address, upstream }
}

pub fn product_json(id: i64, category: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Product {}", id),
        "description": "A product used by integration tests.",
        "category": category,
        "price": 100.0,
        "discountPercentage": 20.0,
        "rating": 4.2,
        "stock": 7,
        "tags": [category],
        "brand": "Acme",
        "sku": "ACME-1",
        "thumbnail": "https://cdn.example.com/thumb.png",
        "images": ["https://cdn.example.com/1.png"],
        "reviews": [{
            "rating": 5,
            "comment": "Great!",
            "date": "2024-05-23T08:56:21.618Z",
            "reviewerName": "Lucas Gordon",
            "reviewerEmail": "lucas.gordon@x.dummyjson.com"
        }]
    })
}

pub fn listing_json(products: Vec<Value>, total: u64, limit: u64) -> Value {
    json!({
        "products": products,
        "total": total,
        "skip": 0,
        "limit": limit
    })
}
