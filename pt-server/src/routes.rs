use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

use api::dependencies::dependencies::{create_dependency, delete_dependency, list_dependencies};
use api::projects::projects::{
    create_project, delete_project, get_project, list_projects, update_project,
};
use api::sprints::sprints::{
    create_sprint, delete_sprint, get_sprint, list_sprints, update_sprint, update_sprint_status,
};
use api::teams::teams::{
    add_member, create_team, delete_team, get_team, list_members, list_teams, remove_member,
    update_team, update_team_status,
};
use api::users::users::{create_user, get_user};
use api::work_items::work_items::{
    assign_work_item_sprint, create_work_item, delete_work_item, get_work_item, list_work_items,
    restore_work_item, update_work_item, update_work_item_status,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Work items
        .route("/api/v1/work-items", post(create_work_item).get(list_work_items))
        .route(
            "/api/v1/work-items/{id}",
            get(get_work_item)
                .put(update_work_item)
                .delete(delete_work_item),
        )
        .route("/api/v1/work-items/{id}/status", put(update_work_item_status))
        .route("/api/v1/work-items/{id}/sprint", put(assign_work_item_sprint))
        .route("/api/v1/work-items/{id}/restore", post(restore_work_item))
        .route(
            "/api/v1/work-items/{id}/dependencies",
            get(list_dependencies).post(create_dependency),
        )
        .route(
            "/api/v1/work-items/{id}/dependencies/{dep_id}",
            delete(delete_dependency),
        )
        // Projects
        .route("/api/v1/projects", post(create_project).get(list_projects))
        .route(
            "/api/v1/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        // Sprints
        .route("/api/v1/sprints", post(create_sprint).get(list_sprints))
        .route(
            "/api/v1/sprints/{id}",
            get(get_sprint).put(update_sprint).delete(delete_sprint),
        )
        .route("/api/v1/sprints/{id}/status", put(update_sprint_status))
        // Teams
        .route("/api/v1/teams", post(create_team).get(list_teams))
        .route(
            "/api/v1/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route("/api/v1/teams/{id}/status", put(update_team_status))
        .route(
            "/api/v1/teams/{id}/members",
            get(list_members).post(add_member),
        )
        .route(
            "/api/v1/teams/{id}/members/{user_id}",
            delete(remove_member),
        )
        // Users
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/users/{id}", get(get_user))
        // Health and ops endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(health::metrics))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
