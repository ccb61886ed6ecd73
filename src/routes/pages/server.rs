use crate::cache_policy::RouteKind;
use crate::connectors::SiteApiConnector;
use crate::helpers::HtmlResponse;
use crate::views::{PageRenderer, PageState};
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

/// Categories rendered on the server from this service's own `/api/ex3`.
#[tracing::instrument(name = "Server-rendered categories page", skip_all)]
#[get("/ui/ex3")]
pub async fn categories(
    renderer: web::Data<PageRenderer>,
    site_api: web::Data<Arc<dyn SiteApiConnector>>,
) -> HttpResponse {
    let result = site_api.categories().await;
    if let Err(err) = &result {
        tracing::error!("Error fetching categories: {:?}", err);
    }
    let state = PageState::Loading.settle(result);

    match renderer.server_categories(&state) {
        Ok(html) => HtmlResponse::page(
            StatusCode::OK,
            html,
            Some(RouteKind::RenderedPage.directive()),
        ),
        Err(err) => HtmlResponse::render_failed(err),
    }
}
