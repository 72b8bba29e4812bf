//! Dependency REST API handlers

use crate::{ApiError, ApiResult, CreateDependencyRequest, DeleteResponse, DependencyListResponse};
use crate::AppState;

use pt_db::{DependencyRepository, WorkItemRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// GET /api/v1/work-items/{id}/dependencies
pub async fn list_dependencies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DependencyListResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;

    WorkItemRepository::find_by_id(&state.pool, work_item_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Work item {} not found", id)))?;

    let depends_on = DependencyRepository::new(state.pool.clone())
        .list_for_item(work_item_id)
        .await?;

    Ok(Json(DependencyListResponse {
        work_item_id: work_item_id.to_string(),
        depends_on: depends_on.iter().map(Uuid::to_string).collect(),
    }))
}

/// POST /api/v1/work-items/{id}/dependencies
///
/// Adds an edge `item -> depends_on`. Edges that would close a cycle
/// (including self-edges) are rejected before the insert.
pub async fn create_dependency(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateDependencyRequest>,
) -> ApiResult<Json<DependencyListResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;
    let depends_on_id = Uuid::parse_str(&req.depends_on_id)?;

    WorkItemRepository::find_by_id(&state.pool, work_item_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Work item {} not found", id)))?;
    WorkItemRepository::find_by_id(&state.pool, depends_on_id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("Work item {} not found", req.depends_on_id))
        })?;

    let deps = DependencyRepository::new(state.pool.clone());

    if deps.would_create_cycle(work_item_id, depends_on_id).await? {
        return Err(ApiError::validation(
            "Dependency would create a cycle",
            Some("depends_on_id"),
        ));
    }

    deps.add(work_item_id, depends_on_id).await?;

    log::info!("Dependency added: {} -> {}", work_item_id, depends_on_id);

    let depends_on = deps.list_for_item(work_item_id).await?;
    Ok(Json(DependencyListResponse {
        work_item_id: work_item_id.to_string(),
        depends_on: depends_on.iter().map(Uuid::to_string).collect(),
    }))
}

/// DELETE /api/v1/work-items/{id}/dependencies/{dep_id}
pub async fn delete_dependency(
    State(state): State<AppState>,
    Path((id, dep_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;
    let depends_on_id = Uuid::parse_str(&dep_id)?;

    let removed = DependencyRepository::new(state.pool.clone())
        .remove(work_item_id, depends_on_id)
        .await?;
    if !removed {
        return Err(ApiError::not_found(format!(
            "Dependency {} -> {} not found",
            id, dep_id
        )));
    }

    Ok(Json(DeleteResponse {
        deleted_id: depends_on_id.to_string(),
    }))
}
