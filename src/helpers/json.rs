use crate::cache_policy::CacheDirective;
use crate::connectors::UpstreamBody;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// Body of every failed proxy response.
#[derive(Debug, Serialize)]
pub(crate) struct JsonError {
    pub(crate) error: String,
}

pub(crate) struct JsonResponse;

impl JsonResponse {
    /// 200 carrying the upstream body byte-for-byte.
    pub(crate) fn passthrough(body: UpstreamBody, directive: CacheDirective) -> HttpResponse {
        let mut builder = HttpResponse::Ok();
        builder.content_type(ContentType::json());
        directive.apply(&mut builder);
        builder.body(body.into_bytes())
    }

    /// 200 with a body serialized here, e.g. the derived category list.
    pub(crate) fn ok<T: Serialize>(value: &T, directive: CacheDirective) -> HttpResponse {
        let mut builder = HttpResponse::Ok();
        directive.apply(&mut builder);
        builder.json(value)
    }

    pub(crate) fn internal_error(message: impl Into<String>) -> HttpResponse {
        HttpResponse::InternalServerError().json(JsonError {
            error: message.into(),
        })
    }
}

pub(crate) struct HtmlResponse;

impl HtmlResponse {
    pub(crate) fn page(status: StatusCode, html: String, directive: Option<CacheDirective>) -> HttpResponse {
        let mut builder = HttpResponse::build(status);
        builder.content_type(ContentType::html());
        if let Some(directive) = directive {
            directive.apply(&mut builder);
        }
        builder.body(html)
    }

    pub(crate) fn render_failed(err: anyhow::Error) -> HttpResponse {
        tracing::error!("Failed to render page: {:?}", err);
        HttpResponse::InternalServerError()
            .content_type(ContentType::plaintext())
            .body("Internal Server Error")
    }
}
