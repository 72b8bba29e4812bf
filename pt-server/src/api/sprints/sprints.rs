//! Sprint REST API handlers

use crate::{
    ApiError, ApiResult, CreateSprintRequest, DeleteResponse, SprintDto, SprintListResponse,
    SprintResponse, SprintStatusRequest, UpdateSprintRequest,
};
use crate::AppState;

use pt_core::{Sprint, SprintStatus};
use pt_db::{ProjectRepository, SprintRepository};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ListSprintsQuery {
    pub project_id: Option<String>,
}

fn parse_date(secs: i64, field: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApiError::validation(format!("Invalid timestamp: {}", secs), Some(field)))
}

/// POST /api/v1/sprints
///
/// Create a sprint in PLANNING. An empty or inverted date window is a 400.
pub async fn create_sprint(
    State(state): State<AppState>,
    Json(req): Json<CreateSprintRequest>,
) -> ApiResult<Json<SprintResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be empty", Some("name")));
    }

    let project_id = Uuid::parse_str(&req.project_id)?;
    ProjectRepository::new(state.pool.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", req.project_id)))?;

    let sprint = Sprint::new(
        project_id,
        req.name.trim().to_string(),
        req.goal,
        parse_date(req.start_date, "start_date")?,
        parse_date(req.end_date, "end_date")?,
    )?;

    SprintRepository::create(&state.pool, &sprint).await?;

    log::info!("Created sprint {} ({})", sprint.name, sprint.id);

    Ok(Json(SprintResponse {
        sprint: SprintDto::from(sprint),
    }))
}

/// GET /api/v1/sprints?project_id
pub async fn list_sprints(
    State(state): State<AppState>,
    Query(query): Query<ListSprintsQuery>,
) -> ApiResult<Json<SprintListResponse>> {
    let project_id = query
        .project_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;

    let sprints = SprintRepository::list(&state.pool, project_id).await?;

    Ok(Json(SprintListResponse {
        sprints: sprints.into_iter().map(SprintDto::from).collect(),
    }))
}

/// GET /api/v1/sprints/{id}
pub async fn get_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SprintResponse>> {
    let sprint_id = Uuid::parse_str(&id)?;

    let sprint = SprintRepository::find_by_id(&state.pool, sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Sprint {} not found", id)))?;

    Ok(Json(SprintResponse {
        sprint: SprintDto::from(sprint),
    }))
}

/// PUT /api/v1/sprints/{id}
///
/// Partial update; the date window invariant is re-checked after the
/// patch is applied.
pub async fn update_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSprintRequest>,
) -> ApiResult<Json<SprintResponse>> {
    let sprint_id = Uuid::parse_str(&id)?;

    let mut sprint = SprintRepository::find_by_id(&state.pool, sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Sprint {} not found", id)))?;

    if let Some(ref name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name must not be empty", Some("name")));
        }
        sprint.name = name.trim().to_string();
    }
    if let Some(ref goal) = req.goal {
        sprint.goal = Some(goal.clone());
    }
    if let Some(secs) = req.start_date {
        sprint.start_date = parse_date(secs, "start_date")?;
    }
    if let Some(secs) = req.end_date {
        sprint.end_date = parse_date(secs, "end_date")?;
    }
    if let Some(points) = req.planned_points {
        sprint.planned_points = points;
    }
    if let Some(points) = req.completed_points {
        sprint.completed_points = points;
    }
    if let Some(velocity) = req.velocity {
        sprint.velocity = velocity;
    }
    sprint.validate_dates()?;

    sprint.updated_at = Utc::now();
    SprintRepository::update(&state.pool, &sprint).await?;

    log::info!("Updated sprint {}", sprint.id);

    Ok(Json(SprintResponse {
        sprint: SprintDto::from(sprint),
    }))
}

/// PUT /api/v1/sprints/{id}/status
///
/// Lifecycle-validated status change: PLANNING -> IN_PROGRESS ->
/// COMPLETED, with CANCELLED reachable from any non-terminal state.
pub async fn update_sprint_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SprintStatusRequest>,
) -> ApiResult<Json<SprintResponse>> {
    let sprint_id = Uuid::parse_str(&id)?;
    let requested = SprintStatus::from_str(&req.status)?;

    let mut sprint = SprintRepository::find_by_id(&state.pool, sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Sprint {} not found", id)))?;

    sprint.status = sprint.status.transition_to(requested)?;
    sprint.updated_at = Utc::now();

    SprintRepository::set_status(&state.pool, sprint_id, sprint.status, sprint.updated_at)
        .await?;

    log::info!("Sprint {} status -> {}", sprint.id, sprint.status.as_str());

    Ok(Json(SprintResponse {
        sprint: SprintDto::from(sprint),
    }))
}

/// DELETE /api/v1/sprints/{id}
pub async fn delete_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let sprint_id = Uuid::parse_str(&id)?;

    let deleted = SprintRepository::soft_delete(&state.pool, sprint_id).await?;
    if !deleted {
        return Err(ApiError::not_found(format!(
            "Sprint {} not found or already deleted",
            id
        )));
    }

    log::info!("Soft-deleted sprint {}", sprint_id);

    Ok(Json(DeleteResponse {
        deleted_id: sprint_id.to_string(),
    }))
}
