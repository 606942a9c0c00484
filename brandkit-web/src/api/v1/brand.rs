//! Brand setup and rename.

use crate::AppState;
use actix_web::web;
use brandkit_core::{actions, BrandResolver};
use brandkit_error::WebResult;
use brandkit_models::{
    domain::prelude::{NewBrand, UpdateBrandName},
    entities::prelude::BrandModel,
    web::{ResponseCode, WebResponse},
};
use std::sync::Arc;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/brand";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(current))
        .route("/setup", web::post().to(setup))
        .route("/name", web::put().to(rename));
}

/// Current brand, `data: null` before setup.
#[instrument(name = "brand-current", skip_all)]
async fn current(state: web::Data<Arc<AppState>>) -> WebResult<WebResponse<BrandModel>> {
    let brand = BrandResolver::current_brand(&state.db).await;
    Ok(WebResponse::new(ResponseCode::Success, "success", brand))
}

#[instrument(name = "brand-setup", skip_all)]
async fn setup(
    payload: web::Json<NewBrand>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<BrandModel>> {
    Ok(actions::setup_brand(&state.db, payload.into_inner())
        .await
        .into())
}

#[instrument(name = "brand-rename", skip_all)]
async fn rename(
    payload: web::Json<UpdateBrandName>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<BrandModel>> {
    Ok(actions::update_brand_name(&state.db, payload.into_inner())
        .await
        .into())
}
