mod common;

use crate::common::{create_test_app_state, create_test_project, create_test_user};

use pt_server::build_router;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

const USER_ID: &str = "00000000-0000-0000-0000-000000000001";

#[tokio::test]
async fn test_create_work_item_allocates_first_key() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(
            json!({
                "project_id": project_id.to_string(),
                "item_type": "story",
                "title": "First story",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["work_item"]["key"], "ACME-1");
    assert_eq!(json["work_item"]["item_type"], "story");
    assert_eq!(json["work_item"]["status"], "backlog");
    assert_eq!(json["work_item"]["priority"], "medium");
}

#[tokio::test]
async fn test_sequential_creates_yield_sequential_keys() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    for expected_key in ["ACME-1", "ACME-2"] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/work-items")
            .header("Content-Type", "application/json")
            .header("X-User-Id", USER_ID)
            .body(Body::from(
                json!({
                    "project_id": project_id.to_string(),
                    "item_type": "story",
                    "title": "A story",
                })
                .to_string(),
            ))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["work_item"]["key"], expected_key);
    }
}

#[tokio::test]
async fn test_create_defect_uses_bug_prefix_and_high_priority() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(
            json!({
                "project_id": project_id.to_string(),
                "item_type": "defect",
                "title": "It breaks",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["work_item"]["key"], "ACME-BUG-1");
    assert_eq!(json["work_item"]["priority"], "high");
}

#[tokio::test]
async fn test_create_work_item_with_invalid_type_lists_allowed_values() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(
            json!({
                "project_id": project_id.to_string(),
                "item_type": "saga",
                "title": "Nope",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "item_type");
    let allowed = json["error"]["allowed_values"].as_array().unwrap();
    assert!(allowed.iter().any(|v| v == "story"));
    assert!(allowed.iter().any(|v| v == "defect"));
}

#[tokio::test]
async fn test_update_status_with_unknown_value_does_not_mutate_row() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    let create = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(
            json!({
                "project_id": project_id.to_string(),
                "item_type": "task",
                "title": "A task",
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let item_id = created["work_item"]["id"].as_str().unwrap().to_string();

    let bad_status = Request::builder()
        .method("PUT")
        .uri(format!("/api/v1/work-items/{}/status", item_id))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "status": "paused" }).to_string()))
        .unwrap();
    let response = app.clone().oneshot(bad_status).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert!(json["error"]["allowed_values"].is_array());

    // Row untouched
    let get = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/work-items/{}", item_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(get).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["work_item"]["status"], "backlog");
}

#[tokio::test]
async fn test_soft_delete_hides_from_list_and_restore_brings_back() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    let create = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(
            json!({
                "project_id": project_id.to_string(),
                "item_type": "story",
                "title": "Disappearing story",
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let item_id = created["work_item"]["id"].as_str().unwrap().to_string();

    // Delete
    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/work-items/{}", item_id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Gone from the default list
    let list = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/work-items?project_id={}", project_id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(list).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["work_items"].as_array().unwrap().len(), 0);

    // Still fetchable by id
    let get = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/work-items/{}", item_id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(get).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Restore brings it back with the same key
    let restore = Request::builder()
        .method("POST")
        .uri(format!("/api/v1/work-items/{}/restore", item_id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(restore).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/work-items?project_id={}", project_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(list).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let items = json["work_items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["key"], "ACME-1");
}

#[tokio::test]
async fn test_get_work_item_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let fake_id = Uuid::new_v4();
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/work-items/{}", fake_id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_work_item_with_unknown_assignee_returns_not_found() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(
            json!({
                "project_id": project_id.to_string(),
                "item_type": "story",
                "title": "Assigned to nobody",
                "assignee_id": Uuid::new_v4().to_string(),
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_work_item_with_unknown_caller_returns_not_found() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .header("X-User-Id", Uuid::new_v4().to_string())
        .body(Body::from(
            json!({
                "project_id": project_id.to_string(),
                "item_type": "story",
                "title": "Reported by nobody",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_work_item_with_unknown_assignee_returns_not_found() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    let create = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .header("X-User-Id", USER_ID)
        .body(Body::from(
            json!({
                "project_id": project_id.to_string(),
                "item_type": "task",
                "title": "A task",
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let item_id = created["work_item"]["id"].as_str().unwrap().to_string();

    let update = Request::builder()
        .method("PUT")
        .uri(format!("/api/v1/work-items/{}", item_id))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({ "assignee_id": Uuid::new_v4().to_string() }).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(update).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_work_item_without_user_header_is_rejected() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, USER_ID).await;
    let project_id = create_test_project(&state.pool, USER_ID).await;

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/work-items")
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({
                "project_id": project_id.to_string(),
                "item_type": "story",
                "title": "No author",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
