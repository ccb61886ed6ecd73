use crate::helpers::HtmlResponse;
use crate::views::PageRenderer;
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse};

#[get("/")]
pub async fn index(renderer: web::Data<PageRenderer>) -> HttpResponse {
    match renderer.home() {
        Ok(html) => HtmlResponse::page(StatusCode::OK, html, None),
        Err(err) => HtmlResponse::render_failed(err),
    }
}
