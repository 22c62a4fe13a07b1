mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use serde_json::json;
use uuid::Uuid;

#[actix_web::test]
async fn test_task_referential_checks() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (_admin, bearer) = client.create_admin().await;
    let team = client.create_team("Development Team").await;
    let project = client.create_project(team.id, "E-Commerce Platform").await;

    // unknown project
    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({ "projectId": Uuid::new_v4(), "title": "Setup Database" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    // unknown assignee
    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({
            "projectId": project.id,
            "title": "Setup Database",
            "assignedTo": Uuid::new_v4()
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    // nothing was written
    let req = test::TestRequest::get()
        .uri("/api/tasks")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_task_lifecycle_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (_admin, bearer) = client.create_admin().await;
    let (member, member_bearer) = client.create_member().await;
    let team = client.create_team("Development Team").await;
    let project = client.create_project(team.id, "E-Commerce Platform").await;

    // member cannot create tasks
    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(("Authorization", format!("Bearer {}", member_bearer)))
        .set_json(json!({ "projectId": project.id, "title": "Sneaky Task" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    // admin creates, task starts in Todo
    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({
            "projectId": project.id,
            "title": "Implement Authentication",
            "description": "JWT authentication system"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let task_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["status"], "Todo");
    assert_eq!(body["projectName"], "E-Commerce Platform");
    assert!(body["assignedTo"].is_null());

    // assign to a member, name comes back resolved
    let req = test::TestRequest::patch()
        .uri(&format!("/api/tasks/{}/assign/{}", task_id, member.id))
        .insert_header(("Authorization", format!("Bearer {}", member_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["assignedTo"].as_str().unwrap(), member.id.to_string());
    assert_eq!(
        body["assignedToName"].as_str().unwrap(),
        member.full_name.as_str()
    );

    // assigning to an unknown user is a 404
    let req = test::TestRequest::patch()
        .uri(&format!("/api/tasks/{}/assign/{}", task_id, Uuid::new_v4()))
        .insert_header(("Authorization", format!("Bearer {}", member_bearer)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    // status moves through the closed enum
    let req = test::TestRequest::patch()
        .uri(&format!("/api/tasks/{task_id}/status"))
        .insert_header(("Authorization", format!("Bearer {}", member_bearer)))
        .set_json(json!({ "status": "doing" }))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["status"], "Doing");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/tasks/{task_id}/status"))
        .insert_header(("Authorization", format!("Bearer {}", member_bearer)))
        .set_json(json!({ "status": "not-a-status" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    // full update clears the assignee
    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{task_id}"))
        .insert_header(("Authorization", format!("Bearer {}", member_bearer)))
        .set_json(json!({
            "title": "Implement Authentication",
            "status": "Done",
            "assignedTo": null
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Done");
    assert!(body["assignedTo"].is_null());
    assert!(body["assignedToName"].is_null());

    // delete is admin-only
    let req = test::TestRequest::delete()
        .uri(&format!("/api/tasks/{task_id}"))
        .insert_header(("Authorization", format!("Bearer {}", member_bearer)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/tasks/{task_id}"))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
}

#[actix_web::test]
async fn test_tasks_listed_by_project() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (_admin, bearer) = client.create_admin().await;
    let team = client.create_team("Development Team").await;
    let project_a = client.create_project(team.id, "Project A").await;
    let project_b = client.create_project(team.id, "Project B").await;

    for (project_id, title) in [(project_a.id, "A1"), (project_a.id, "A2"), (project_b.id, "B1")] {
        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .insert_header(("Authorization", format!("Bearer {}", bearer)))
            .set_json(json!({ "projectId": project_id, "title": title }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/tasks/project/{}", project_a.id))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let tasks = body.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks
        .iter()
        .all(|t| t["projectId"].as_str().unwrap() == project_a.id.to_string()));

    // project list reflects the task counts
    let req = test::TestRequest::get()
        .uri("/api/projects")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let projects = body.as_array().unwrap();
    let a = projects
        .iter()
        .find(|p| p["id"].as_str().unwrap() == project_a.id.to_string())
        .unwrap();
    assert_eq!(a["taskCount"], 2);
}
