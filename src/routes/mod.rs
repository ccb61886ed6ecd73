pub mod api;
pub mod health_checks;
pub mod pages;

pub use health_checks::*;
