use crate::AppState;
use actix_web::web;
use brandkit_core::{actions, queries};
use brandkit_error::WebResult;
use brandkit_models::{
    domain::prelude::{map_personality_with_questions, PersonalityQuestion, UpdatePersonality},
    web::WebResponse,
};
use std::sync::Arc;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/personality";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(questionnaire))
        .route("", web::put().to(update));
}

/// All nine questions paired with the stored answers.
#[instrument(name = "personality-get", skip_all)]
async fn questionnaire(
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<Vec<PersonalityQuestion>>> {
    let answers = queries::get_brand_personality(&state.db).await;
    Ok(WebResponse::ok(map_personality_with_questions(&answers)))
}

#[instrument(name = "personality-update", skip_all)]
async fn update(
    payload: web::Json<UpdatePersonality>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<()>> {
    Ok(actions::update_personality(&state.db, payload.into_inner().answers)
        .await
        .into())
}
