mod common;

use actix_web::{http::StatusCode, test};
use chrono::Utc;
use common::{client::TestClient, test_data, TestContext};
use crewtrack::utils::token;
use entity::user::UserRole;
use uuid::Uuid;

#[actix_web::test]
async fn test_register_login_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(test_data::sample_register())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let bearer = body["token"].as_str().unwrap().to_string();
    let subject = body["user"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["fullName"], "Alice Example");
    assert_eq!(body["user"]["role"], "Member");

    // token decodes back to the registered identity
    let claims = token::decode_token(&bearer, &ctx.jwt).unwrap();
    assert_eq!(claims.sub.to_string(), subject);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.role, UserRole::Member);

    // login returns the same subject
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(test_data::login("a@x.com", "pw123456"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["id"].as_str().unwrap(), subject);

    // wrong password is rejected
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(test_data::login("a@x.com", "wrong"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_register_duplicate_email_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(test_data::register_with_email("dup@test.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ctx.db.count_users().await.unwrap(), 1);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(test_data::register_with_email("dup@test.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // no partial write
    assert_eq!(ctx.db.count_users().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_login_failures_are_indistinguishable() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(test_data::register_with_email("known@test.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::OK
    );

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(test_data::login("known@test.com", "wrong-password"))
        .to_request();
    let wrong_pw = test::call_service(&app, req).await;
    assert_eq!(wrong_pw.status(), StatusCode::UNAUTHORIZED);
    let wrong_pw_body = test::read_body(wrong_pw).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(test_data::login("nobody@test.com", "whatever"))
        .to_request();
    let unknown = test::call_service(&app, req).await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown_body = test::read_body(unknown).await;

    // no user-existence leak
    assert_eq!(wrong_pw_body, unknown_body);
}

#[actix_web::test]
async fn test_register_validation_errors() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let cases = [
        serde_json::json!({ "fullName": "", "email": "x@y.com", "password": "pw123456" }),
        serde_json::json!({ "fullName": "X", "email": "not-an-email", "password": "pw123456" }),
        serde_json::json!({ "fullName": "X", "email": "x@y.com", "password": "short" }),
    ];

    for case in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&case)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "case: {case}");
    }

    assert_eq!(ctx.db.count_users().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_profile_roundtrip() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (user, bearer) = client.create_member().await;

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"].as_str().unwrap(), user.id.to_string());
    assert_eq!(body["email"].as_str().unwrap(), user.email);
    assert!(body.get("passwordHash").is_none());
}

#[actix_web::test]
async fn test_profile_for_deleted_subject_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    // valid token whose subject never existed in the store
    let ghost = entity::user::Model {
        id: Uuid::new_v4(),
        full_name: "Ghost".to_string(),
        email: "ghost@test.com".to_string(),
        password_hash: String::new(),
        role: UserRole::Member,
        job_role: None,
        created_at: Utc::now(),
    };
    let bearer = token::issue(&ghost, &ctx.jwt).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_profile_requires_valid_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/api/auth/profile").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
