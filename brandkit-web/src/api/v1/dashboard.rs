use crate::AppState;
use actix_web::web;
use brandkit_core::dashboard;
use brandkit_error::WebResult;
use brandkit_models::{
    domain::prelude::BrandDashboard,
    web::{ResponseCode, WebResponse},
};
use std::sync::Arc;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/dashboard";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(overview))
        .route("/setup-complete", web::get().to(setup_complete));
}

/// Aggregated view; `data: null` before setup.
#[instrument(name = "dashboard-get", skip_all)]
async fn overview(state: web::Data<Arc<AppState>>) -> WebResult<WebResponse<BrandDashboard>> {
    let view = dashboard::get_brand_dashboard_data(&state.db).await;
    Ok(WebResponse::new(ResponseCode::Success, "success", view))
}

#[instrument(name = "dashboard-setup-complete", skip_all)]
async fn setup_complete(state: web::Data<Arc<AppState>>) -> WebResult<WebResponse<bool>> {
    Ok(WebResponse::ok(
        dashboard::is_brand_setup_complete(&state.db).await,
    ))
}
