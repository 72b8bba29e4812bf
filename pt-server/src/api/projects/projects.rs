//! Project REST API handlers

use crate::{
    ApiError, ApiResult, CreateProjectRequest, DeleteResponse, ProjectDto, ProjectListResponse,
    ProjectResponse, UpdateProjectRequest, UserId,
};
use crate::AppState;

use pt_core::{Project, ProjectStatus};
use pt_db::ProjectRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use uuid::Uuid;

fn parse_date(secs: i64, field: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApiError::validation(format!("Invalid timestamp: {}", secs), Some(field)))
}

/// POST /api/v1/projects
///
/// Create a project. The caller becomes the owner; the key must be unique
/// across live and soft-deleted projects.
pub async fn create_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be empty", Some("name")));
    }
    if req.key.trim().is_empty() {
        return Err(ApiError::validation("key must not be empty", Some("key")));
    }

    let mut project = Project::new(
        req.name.trim().to_string(),
        req.key.trim().to_uppercase(),
        user_id,
    );
    project.description = req.description;
    project.start_date = req
        .start_date
        .map(|secs| parse_date(secs, "start_date"))
        .transpose()?;
    project.target_end_date = req
        .target_end_date
        .map(|secs| parse_date(secs, "target_end_date"))
        .transpose()?;
    project.validate_dates()?;

    ProjectRepository::new(state.pool.clone())
        .create(&project)
        .await?;

    log::info!("Created project {} ({})", project.key, project.id);

    Ok(Json(ProjectResponse {
        project: ProjectDto::from(project),
    }))
}

/// GET /api/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> ApiResult<Json<ProjectListResponse>> {
    let projects = ProjectRepository::new(state.pool.clone()).list().await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let project = ProjectRepository::new(state.pool.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))?;

    Ok(Json(ProjectResponse {
        project: ProjectDto::from(project),
    }))
}

/// PUT /api/v1/projects/{id}
///
/// Partial update. The date window invariant is re-checked on every path.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let repo = ProjectRepository::new(state.pool.clone());

    let mut project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))?;

    if let Some(ref name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name must not be empty", Some("name")));
        }
        project.name = name.trim().to_string();
    }
    if let Some(ref description) = req.description {
        project.description = Some(description.clone());
    }
    if let Some(ref status) = req.status {
        project.status = ProjectStatus::from_str(status)?;
    }
    if let Some(secs) = req.start_date {
        project.start_date = Some(parse_date(secs, "start_date")?);
    }
    if let Some(secs) = req.target_end_date {
        project.target_end_date = Some(parse_date(secs, "target_end_date")?);
    }
    project.validate_dates()?;

    project.updated_at = Utc::now();
    repo.update(&project).await?;

    log::info!("Updated project {}", project.key);

    Ok(Json(ProjectResponse {
        project: ProjectDto::from(project),
    }))
}

/// DELETE /api/v1/projects/{id}
///
/// Soft delete. Work items and sprints under the project are left alone;
/// they stay reachable by id.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let deleted = ProjectRepository::new(state.pool.clone())
        .soft_delete(project_id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!(
            "Project {} not found or already deleted",
            id
        )));
    }

    log::info!("Soft-deleted project {}", project_id);

    Ok(Json(DeleteResponse {
        deleted_id: project_id.to_string(),
    }))
}
