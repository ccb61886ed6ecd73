use catalog_demo::configuration::get_configuration;
use catalog_demo::startup::run;
use catalog_demo::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("catalog-demo".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    let address = settings.address();
    tracing::info!(
        base_url = %settings.base_url,
        "Start server at {:?}",
        &address
    );
    let listener =
        TcpListener::bind(&address).unwrap_or_else(|_| panic!("failed to bind to {}", address));

    run(listener, settings).await?.await
}
