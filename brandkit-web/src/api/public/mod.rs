//! Public (non-API-prefix) routes.
//!
//! These routes are mounted at the **root** and therefore must be registered
//! outside the `/api` router prefix scope.

mod health;

use actix_web::web;

/// Configure all public root routes.
#[inline]
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_health_routes);
}
