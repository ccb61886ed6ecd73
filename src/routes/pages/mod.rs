pub mod catalog;
pub mod client;
pub mod home;
pub mod server;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home::index)
        .service(client::direct_fetch)
        .service(client::proxy_listing)
        .service(client::proxy_product)
        .service(server::categories)
        .service(catalog::index_page)
        .service(catalog::category_page)
        .service(catalog::product_page);
}
