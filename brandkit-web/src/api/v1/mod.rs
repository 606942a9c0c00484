//! V1 API routes
mod adjectives;
mod brand;
mod dashboard;
mod personality;
mod rules;

use actix_web::web;
use serde::Deserialize;

/// Path parameter carrying a row id.
#[derive(Debug, Deserialize)]
pub struct PathId {
    pub id: i32,
}

/// Configure all v1 routes
pub fn configure_v1_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(brand::ROUTER_PREFIX).configure(brand::configure_routes))
        .service(web::scope(personality::ROUTER_PREFIX).configure(personality::configure_routes))
        .service(web::scope(adjectives::ROUTER_PREFIX).configure(adjectives::configure_routes))
        .service(web::scope(rules::ROUTER_PREFIX).configure(rules::configure_routes))
        .service(web::scope(dashboard::ROUTER_PREFIX).configure(dashboard::configure_routes));
}
