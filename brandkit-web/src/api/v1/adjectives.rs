use crate::AppState;
use actix_web::web;
use brandkit_core::{actions, queries};
use brandkit_error::WebResult;
use brandkit_models::{
    domain::prelude::{AdjectiveInfo, UpdateAdjectives},
    web::WebResponse,
};
use std::sync::Arc;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/adjectives";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list)).route("", web::put().to(update));
}

#[instrument(name = "adjectives-list", skip_all)]
async fn list(state: web::Data<Arc<AppState>>) -> WebResult<WebResponse<Vec<AdjectiveInfo>>> {
    Ok(WebResponse::ok(queries::get_brand_adjectives(&state.db).await))
}

#[instrument(name = "adjectives-update", skip_all)]
async fn update(
    payload: web::Json<UpdateAdjectives>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<()>> {
    Ok(
        actions::update_adjectives(&state.db, payload.into_inner().adjectives)
            .await
            .into(),
    )
}
