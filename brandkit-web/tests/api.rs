mod common;

use actix_web::{
    http::StatusCode,
    middleware::NormalizePath,
    test::{self, TestRequest},
    App,
};
use brandkit_web::configure_app;
use common::{adjectives, answers, rule, state, PREFIX};
use serde_json::{json, Value};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .configure(configure_app(state().await, PREFIX)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = app!();
    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "OK");
}

#[actix_web::test]
async fn test_brand_lifecycle() {
    let app = app!();

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/brand").to_request(),
    )
    .await;
    assert_eq!(body["code"], 0);
    assert!(body["data"].is_null());

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::post()
            .uri("/api/brand/setup")
            .set_json(json!({ "name": "  Acme  " }))
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["name"], "Acme");

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::post()
            .uri("/api/brand/setup")
            .set_json(json!({ "name": "Other" }))
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 400);
    assert_eq!(
        body["message"],
        "A brand already exists for this account. You can only have one brand."
    );

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::put()
            .uri("/api/brand/name")
            .set_json(json!({ "name": "Acme Corp" }))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["name"], "Acme Corp");
}

#[actix_web::test]
async fn test_mutations_without_brand_are_rejected() {
    let app = app!();
    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::post()
            .uri("/api/rules")
            .set_json(rule("Be brief"))
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 400);
    assert_eq!(
        body["message"],
        "No brand found. Please set up your brand first."
    );

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/dashboard").to_request(),
    )
    .await;
    assert_eq!(body["code"], 0);
    assert!(body["data"].is_null());

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/rules").to_request(),
    )
    .await;
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_personality_questionnaire() {
    let app = app!();
    test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/brand/setup")
            .set_json(json!({ "name": "Acme" }))
            .to_request(),
    )
    .await;

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/personality").to_request(),
    )
    .await;
    let questions = body["data"].as_array().unwrap();
    assert_eq!(questions.len(), 9);
    assert!(questions.iter().all(|q| q["isAnswered"] == false));

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::put()
            .uri("/api/personality")
            .set_json(answers())
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 0);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/personality").to_request(),
    )
    .await;
    assert_eq!(body["data"][4]["answer"], "answer 4");
    assert_eq!(body["data"][4]["isAnswered"], true);

    let mut short = answers();
    short["answers"].as_array_mut().unwrap().pop();
    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::put()
            .uri("/api/personality")
            .set_json(short)
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Must have exactly 9 answers");
}

#[actix_web::test]
async fn test_rules_and_dashboard() {
    let app = app!();
    test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/brand/setup")
            .set_json(json!({ "name": "Acme" }))
            .to_request(),
    )
    .await;

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::post()
            .uri("/api/rules")
            .set_json(rule("Be brief"))
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["isActive"], true);
    let id = body["data"]["id"].as_i64().unwrap();

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::put()
            .uri(&format!("/api/rules/{id}/toggle"))
            .set_json(json!({ "isActive": false }))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["isActive"], false);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::put()
            .uri(&format!("/api/rules/{id}"))
            .set_json(json!({
                "title": "Be brief",
                "description": "Short",
                "doExample": "We ship.",
                "dontExample": "We are shipping soon-ish.",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Description must be at least 10 characters");

    test::call_service(
        &app,
        TestRequest::put()
            .uri("/api/adjectives")
            .set_json(adjectives(["Bold", "Warm", "Clear"]))
            .to_request(),
    )
    .await;

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/dashboard/").to_request(),
    )
    .await;
    let stats = &body["data"]["stats"];
    assert_eq!(stats["totalRules"], 1);
    assert_eq!(stats["activeRulesCount"], 0);
    assert_eq!(stats["adjectivesCompletion"], 3);
    assert_eq!(stats["isPersonalityComplete"], false);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get()
            .uri("/api/dashboard/setup-complete")
            .to_request(),
    )
    .await;
    assert_eq!(body["data"], false);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::delete()
            .uri(&format!("/api/rules/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 0);

    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/api/rules/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::delete()
            .uri(&format!("/api/rules/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Rule not found.");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = app!();
    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/brand/setup")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\":")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Bad Request");
}
