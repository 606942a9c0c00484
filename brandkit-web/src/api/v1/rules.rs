//! Writing rules: list, read, create, edit, toggle, delete.

use super::PathId;
use crate::AppState;
use actix_web::web::{self, Path};
use brandkit_core::{actions, queries};
use brandkit_error::{web::WebError, WebResult};
use brandkit_models::{
    domain::prelude::{RuleInfo, RuleInput, ToggleRule},
    web::WebResponse,
};
use std::sync::Arc;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/rules";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete))
        .route("/{id}/toggle", web::put().to(toggle));
}

#[instrument(name = "rules-list", skip_all)]
async fn list(state: web::Data<Arc<AppState>>) -> WebResult<WebResponse<Vec<RuleInfo>>> {
    Ok(WebResponse::ok(queries::get_brand_rules(&state.db).await))
}

#[instrument(name = "rules-get", skip(state))]
async fn get_by_id(
    req: Path<PathId>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<RuleInfo>> {
    let rule = queries::get_rule_by_id(&state.db, req.id)
        .await
        .ok_or_else(|| WebError::NotFound("Rule".into()))?;
    Ok(WebResponse::ok(rule))
}

#[instrument(name = "rules-create", skip_all)]
async fn create(
    payload: web::Json<RuleInput>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<RuleInfo>> {
    Ok(actions::create_rule(&state.db, payload.into_inner())
        .await
        .into())
}

#[instrument(name = "rules-update", skip(payload, state))]
async fn update(
    req: Path<PathId>,
    payload: web::Json<RuleInput>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<RuleInfo>> {
    Ok(actions::update_rule(&state.db, req.id, payload.into_inner())
        .await
        .into())
}

#[instrument(name = "rules-toggle", skip(payload, state))]
async fn toggle(
    req: Path<PathId>,
    payload: web::Json<ToggleRule>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<RuleInfo>> {
    Ok(actions::toggle_rule(&state.db, req.id, payload.is_active)
        .await
        .into())
}

#[instrument(name = "rules-delete", skip(state))]
async fn delete(req: Path<PathId>, state: web::Data<Arc<AppState>>) -> WebResult<WebResponse<()>> {
    Ok(actions::delete_rule(&state.db, req.id).await.into())
}
