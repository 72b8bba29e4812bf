mod common;

use crate::common::{create_test_app_state, create_test_project, create_test_user};

use pt_server::build_router;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

const USER_ID: &str = "00000000-0000-0000-0000-000000000004";

async fn create_work_item(app: &Router, project_id: &str, title: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(
            json!({ "project_id": project_id, "item_type": "task", "title": title }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["work_item"]["id"].as_str().unwrap().to_string()
}

async fn add_dependency(app: &Router, item_id: &str, depends_on_id: &str) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/v1/work-items/{}/dependencies", item_id))
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(
            json!({ "depends_on_id": depends_on_id }).to_string(),
        ))
        .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_add_and_list_dependencies() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await.to_string();

    let app = build_router(state.clone());
    let a = create_work_item(&app, &project_id, "Parser").await;
    let b = create_work_item(&app, &project_id, "Lexer").await;

    assert_eq!(add_dependency(&app, &a, &b).await, StatusCode::OK);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/work-items/{}/dependencies", a))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["work_item_id"], a);
    assert_eq!(json["depends_on"], json!([b]));
}

#[tokio::test]
async fn test_cycle_is_rejected() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await.to_string();

    let app = build_router(state.clone());
    let a = create_work_item(&app, &project_id, "Parser").await;
    let b = create_work_item(&app, &project_id, "Lexer").await;
    let c = create_work_item(&app, &project_id, "Tokens").await;

    assert_eq!(add_dependency(&app, &a, &b).await, StatusCode::OK);
    assert_eq!(add_dependency(&app, &b, &c).await, StatusCode::OK);

    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/v1/work-items/{}/dependencies", c))
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(json!({ "depends_on_id": a }).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "depends_on_id");

    // c never gained the edge
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/work-items/{}/dependencies", c))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["depends_on"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_self_dependency_is_rejected() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await.to_string();

    let app = build_router(state.clone());
    let a = create_work_item(&app, &project_id, "Parser").await;

    assert_eq!(add_dependency(&app, &a, &a).await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_dependency_returns_conflict() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await.to_string();

    let app = build_router(state.clone());
    let a = create_work_item(&app, &project_id, "Parser").await;
    let b = create_work_item(&app, &project_id, "Lexer").await;

    assert_eq!(add_dependency(&app, &a, &b).await, StatusCode::OK);
    assert_eq!(add_dependency(&app, &a, &b).await, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_remove_missing_dependency_returns_not_found() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await.to_string();

    let app = build_router(state.clone());
    let a = create_work_item(&app, &project_id, "Parser").await;
    let b = create_work_item(&app, &project_id, "Lexer").await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/work-items/{}/dependencies/{}", a, b))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
