pub mod cache_policy;
pub mod configuration;
pub mod connectors;
mod helpers;
pub mod models;
pub mod routes;
pub mod startup;
pub mod static_paths;
pub mod static_site;
pub mod telemetry;
pub mod views;
