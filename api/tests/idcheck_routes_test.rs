//! Integration tests for the ID check endpoints
//!
//! Drives the full app with the in-memory store and a scripted vendor.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};

use ir_api::{create_app, AppState};
use ir_core::repositories::{InMemoryUserRepository, UserRepository};
use ir_core::services::idcheck::mock::{MockIdCheckVendor, MockOutcome};
use ir_shared::{CorsConfig, Environment};

struct TestContext {
    users: Arc<InMemoryUserRepository>,
    vendor: Arc<MockIdCheckVendor>,
    state: web::Data<AppState<InMemoryUserRepository, MockIdCheckVendor>>,
}

impl TestContext {
    fn new(vendor: MockIdCheckVendor) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let vendor = Arc::new(vendor);
        let state = web::Data::new(AppState::new(users.clone(), vendor.clone(), "pk_test_public"));
        Self { users, vendor, state }
    }
}

fn verified_body() -> Value {
    json!({
        "info": {
            "first_name": "Ada",
            "last_name": "Lovelace",
            "other_field": "x",
            "document_number": "P1234567"
        }
    })
}

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(create_app(
            $ctx.state.clone(),
            &CorsConfig::default(),
            Environment::Development,
        ))
        .await
    };
}

#[actix_web::test]
async fn test_exchange_token_success() {
    let ctx = TestContext::new(MockIdCheckVendor::new());
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/exchangetoken")
        .set_json(json!({ "user_id": "u1", "caisson_exchange_token": "xchg_1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "user_id": "u1" }));

    let record = ctx.users.find("u1").await.unwrap().unwrap();
    assert_eq!(record.check_id.as_deref(), Some("chk_mock_0001"));
    assert_eq!(ctx.vendor.exchange_tokens(), vec!["xchg_1".to_string()]);
}

#[actix_web::test]
async fn test_exchange_token_missing_fields() {
    let ctx = TestContext::new(MockIdCheckVendor::new());
    let app = init_app!(ctx);

    for payload in [
        json!({ "caisson_exchange_token": "xchg_1" }),
        json!({ "user_id": "u1" }),
        json!({ "user_id": "", "caisson_exchange_token": "xchg_1" }),
        json!({ "user_id": "u1", "caisson_exchange_token": "" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/exchangetoken")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error_kind"], "INVALID_REQUEST");
        assert!(body["message"].is_string());
    }

    assert_eq!(ctx.vendor.exchange_calls(), 0);
    assert_eq!(ctx.users.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_exchange_token_malformed_json() {
    let ctx = TestContext::new(MockIdCheckVendor::new());
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/exchangetoken")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_kind"], "INVALID_REQUEST");
    assert_eq!(ctx.vendor.exchange_calls(), 0);
}

#[actix_web::test]
async fn test_exchange_token_vendor_rejection_hides_detail() {
    let vendor = MockIdCheckVendor::new().with_exchange_outcome(MockOutcome::Reply(json!({
        "error": "INVALID_TOKEN",
        "error_message": "token already redeemed"
    })));
    let ctx = TestContext::new(vendor);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/exchangetoken")
        .set_json(json!({ "user_id": "u1", "caisson_exchange_token": "used" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_kind"], "UNEXPECTED_ERROR");
    assert!(!body["message"].as_str().unwrap().contains("redeemed"));
    assert!(ctx.users.find("u1").await.unwrap().is_none());
}

#[actix_web::test]
async fn test_exchange_token_relays_vendor_status() {
    let vendor = MockIdCheckVendor::new().with_exchange_outcome(MockOutcome::HttpStatus(401));
    let ctx = TestContext::new(vendor);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/exchangetoken")
        .set_json(json!({ "user_id": "u1", "caisson_exchange_token": "xchg_1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_kind"], "UPSTREAM_HTTP_ERROR");
}

#[actix_web::test]
async fn test_result_before_exchange() {
    let ctx = TestContext::new(MockIdCheckVendor::new());
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/idcheckresult?user_id=fresh")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_kind"], "MISSING_CHECK_ID");
    assert_eq!(ctx.vendor.result_calls(), 0);
}

#[actix_web::test]
async fn test_full_flow_projects_names_and_caches() {
    let vendor = MockIdCheckVendor::new().with_result_outcome(MockOutcome::Reply(verified_body()));
    let ctx = TestContext::new(vendor);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/exchangetoken")
        .set_json(json!({ "user_id": "u1", "caisson_exchange_token": "xchg_1" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/idcheckresult")
            .insert_header(("X-Example-UserID", "u1"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "user_id": "u1",
                "id_check_data": { "first_name": "Ada", "last_name": "Lovelace" }
            })
        );
    }

    assert_eq!(ctx.vendor.result_calls(), 1);
    assert_eq!(ctx.vendor.check_ids(), vec!["chk_mock_0001".to_string()]);
}

#[actix_web::test]
async fn test_result_not_verified() {
    let ctx = TestContext::new(MockIdCheckVendor::new());
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/exchangetoken")
        .set_json(json!({ "user_id": "u1", "caisson_exchange_token": "xchg_1" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/idcheckresult?user_id=u1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_kind"], "NOT_VERIFIED");
    assert_eq!(body["message"], "User 'u1' has not yet verified their ID");

    let record = ctx.users.find("u1").await.unwrap().unwrap();
    assert!(!record.has_result());
}

#[actix_web::test]
async fn test_result_vendor_not_found_is_relayed() {
    let vendor = MockIdCheckVendor::new().with_result_outcome(MockOutcome::HttpStatus(404));
    let ctx = TestContext::new(vendor);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/exchangetoken")
        .set_json(json!({ "user_id": "u1", "caisson_exchange_token": "xchg_1" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/idcheckresult?user_id=u1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_kind"], "UPSTREAM_HTTP_ERROR");
}

#[actix_web::test]
async fn test_result_header_wins_over_query() {
    let vendor = MockIdCheckVendor::new().with_result_outcome(MockOutcome::Reply(verified_body()));
    let ctx = TestContext::new(vendor);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/exchangetoken")
        .set_json(json!({ "user_id": "from-header", "caisson_exchange_token": "xchg_1" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/idcheckresult?user_id=from-query")
        .insert_header(("X-Example-UserID", "from-header"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], "from-header");
    assert!(ctx.users.find("from-query").await.unwrap().is_none());
}

#[actix_web::test]
async fn test_index_page_embeds_public_key() {
    let ctx = TestContext::new(MockIdCheckVendor::new());
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = test::read_body(resp).await;
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("pk_test_public"));
    assert!(page.contains("data-user-id=\""));
}

#[actix_web::test]
async fn test_health_check() {
    let ctx = TestContext::new(MockIdCheckVendor::new());
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_uses_envelope() {
    let ctx = TestContext::new(MockIdCheckVendor::new());
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_kind"], "NOT_FOUND");
}
