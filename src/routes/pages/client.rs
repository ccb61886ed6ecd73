//! Client-rendered pages. The server only sends the shell; the browser
//! performs the fetch.

use crate::connectors::{CatalogConnector, CatalogServiceConfig};
use crate::helpers::HtmlResponse;
use crate::views::PageRenderer;
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "Direct fetch page", skip_all)]
#[get("/ui/ex1")]
pub async fn direct_fetch(
    renderer: web::Data<PageRenderer>,
    catalog: web::Data<Arc<dyn CatalogConnector>>,
    config: web::Data<CatalogServiceConfig>,
) -> HttpResponse {
    let source = format!(
        "{}/products?limit={}",
        catalog.public_base_url(),
        config.direct_listing_limit
    );
    match renderer.direct_fetch(&source) {
        Ok(html) => HtmlResponse::page(StatusCode::OK, html, None),
        Err(err) => HtmlResponse::render_failed(err),
    }
}

#[tracing::instrument(name = "Proxy listing page", skip_all)]
#[get("/ui/ex2")]
pub async fn proxy_listing(renderer: web::Data<PageRenderer>) -> HttpResponse {
    match renderer.proxy_listing() {
        Ok(html) => HtmlResponse::page(StatusCode::OK, html, None),
        Err(err) => HtmlResponse::render_failed(err),
    }
}

#[tracing::instrument(name = "Proxy product page", skip(renderer))]
#[get("/ui/ex2/{id}")]
pub async fn proxy_product(
    renderer: web::Data<PageRenderer>,
    path: web::Path<String>,
) -> HttpResponse {
    match renderer.proxy_product(&path.into_inner()) {
        Ok(html) => HtmlResponse::page(StatusCode::OK, html, None),
        Err(err) => HtmlResponse::render_failed(err),
    }
}
