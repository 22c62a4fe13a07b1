mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};

#[actix_web::test]
async fn test_personnel_creation_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (_admin, bearer) = client.create_admin().await;

    let req = test::TestRequest::post()
        .uri("/api/users/personnel")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(serde_json::json!({
            "fullName": "Dana Farrell",
            "jobRole": "Designer"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["fullName"], "Dana Farrell");
    assert_eq!(body["jobRole"], "Designer");
    assert_eq!(body["role"], "Member");
    assert_eq!(body["email"], "dana.farrell@personnel.local");

    // same name again gets a deduplicated address
    let req = test::TestRequest::post()
        .uri("/api/users/personnel")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(serde_json::json!({ "fullName": "Dana Farrell" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "dana.farrell1@personnel.local");

    // personnel records have no credentials
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(test_data::login("dana.farrell@personnel.local", ""))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_get_user_by_id() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (admin, bearer) = client.create_admin().await;
    let (member, _) = client.create_member().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", member.id))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"].as_str().unwrap(), member.id.to_string());
    assert_ne!(body["id"].as_str().unwrap(), admin.id.to_string());

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", uuid::Uuid::new_v4()))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_personnel_requires_admin() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (_member, bearer) = client.create_member().await;

    let req = test::TestRequest::post()
        .uri("/api/users/personnel")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(serde_json::json!({ "fullName": "Dana Farrell" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );
}
