use crate::configuration::Settings;
use crate::connectors;
use crate::routes;
use crate::views::PageRenderer;
use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let catalog_config = settings.catalog();

    // Initialize external service connectors (plugin pattern)
    let catalog_connector = connectors::init_catalog_service(&settings.connectors);
    let site_api_connector =
        connectors::init_site_api(&settings.base_url, catalog_config.timeout_secs)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let renderer = PageRenderer::new()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let renderer = web::Data::new(renderer);

    let catalog_config = web::Data::new(catalog_config);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .service(routes::health_check)
            .configure(routes::api::configure)
            .configure(routes::pages::configure)
            .app_data(renderer.clone())
            .app_data(catalog_connector.clone())
            .app_data(site_api_connector.clone())
            .app_data(catalog_config.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
