//! JSON proxy routes under `/api`.
//!
//! Successful responses re-emit the upstream body unchanged with an edge
//! cache directive; failures are a 500 with `{"error": "<message>"}`.

pub mod categories;
pub mod products;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(products::list)
            .service(products::item)
            .service(categories::list_named)
            .service(categories::list)
            .service(categories::products),
    );
}
