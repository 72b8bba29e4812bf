//! Work item REST API handlers

use crate::{
    ApiError, ApiResult, AssignSprintRequest, CreateWorkItemRequest, DeleteResponse,
    ListWorkItemsQuery, UpdateStatusRequest, UpdateWorkItemRequest, UserId, WorkItemDto,
    WorkItemListResponse, WorkItemResponse,
};
use crate::AppState;

use pt_core::{Priority, WorkItem, WorkItemStatus, WorkItemType};
use pt_db::{
    ProjectRepository, SprintRepository, UserRepository, WorkItemFilter, WorkItemRepository,
};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use metrics::counter;
use std::str::FromStr;
use uuid::Uuid;

/// GET /api/v1/work-items/{id}
///
/// Retrieve a single work item by ID. Soft-deleted items are returned too,
/// so clients can inspect and restore them.
pub async fn get_work_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkItemResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;

    let work_item = WorkItemRepository::find_by_id(&state.pool, work_item_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Work item {} not found", id)))?;

    Ok(Json(WorkItemResponse {
        work_item: WorkItemDto::from(work_item),
    }))
}

/// GET /api/v1/work-items?project_id&sprint_id&item_type&status
///
/// List non-deleted work items with optional filters, ordered by key number.
pub async fn list_work_items(
    State(state): State<AppState>,
    Query(query): Query<ListWorkItemsQuery>,
) -> ApiResult<Json<WorkItemListResponse>> {
    let filter = WorkItemFilter {
        project_id: query
            .project_id
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()?,
        sprint_id: query
            .sprint_id
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()?,
        item_type: query
            .item_type
            .as_deref()
            .map(WorkItemType::from_str)
            .transpose()?,
        status: query
            .status
            .as_deref()
            .map(WorkItemStatus::from_str)
            .transpose()?,
    };

    let work_items = WorkItemRepository::find_with_filter(&state.pool, &filter).await?;

    Ok(Json(WorkItemListResponse {
        work_items: work_items.into_iter().map(WorkItemDto::from).collect(),
    }))
}

/// POST /api/v1/work-items
///
/// Create a work item. The key is allocated inside the create transaction,
/// scoped to (project, type); the UNIQUE index on `key` backstops
/// concurrent allocations, so a lost race surfaces as 409.
pub async fn create_work_item(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<CreateWorkItemRequest>,
) -> ApiResult<Json<WorkItemResponse>> {
    if req.title.trim().is_empty() {
        return Err(ApiError::validation("title must not be empty", Some("title")));
    }

    let item_type = WorkItemType::from_str(&req.item_type)?;
    let project_id = Uuid::parse_str(&req.project_id)?;
    let assignee_id = req
        .assignee_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(Uuid::parse_str)
        .transpose()?;

    let projects = ProjectRepository::new(state.pool.clone());
    let project = projects
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", project_id)))?;

    // Reporter and assignee must resolve before touching work_items, so an
    // unknown user is a 404 rather than an FK violation.
    UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;
    if let Some(assignee) = assignee_id {
        UserRepository::find_by_id(&state.pool, assignee)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("User {} not found", assignee)))?;
    }

    let mut tx = state.pool.begin().await?;

    let key_number =
        WorkItemRepository::allocate_key_number(&mut *tx, project_id, item_type).await?;

    let mut work_item = WorkItem::new(
        item_type,
        item_type.format_key(&project.key, key_number),
        key_number,
        project_id,
        req.title.trim().to_string(),
        req.description,
        user_id,
    );
    work_item.assignee_id = assignee_id;
    if let Some(priority) = req.priority.as_deref() {
        work_item.priority = Priority::from_str(priority)?;
    }
    if let Some(estimate) = req.time_estimate_minutes {
        work_item.time_estimate_minutes = estimate;
    }

    WorkItemRepository::create(&mut *tx, &work_item).await?;
    tx.commit().await?;

    counter!("work_items_created_total").increment(1);
    log::info!("Created work item {} ({})", work_item.key, work_item.id);

    Ok(Json(WorkItemResponse {
        work_item: WorkItemDto::from(work_item),
    }))
}

/// PUT /api/v1/work-items/{id}
///
/// Partial update. `item_type` in the body is ignored: the key prefix it
/// decided at create time must stay truthful.
pub async fn update_work_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateWorkItemRequest>,
) -> ApiResult<Json<WorkItemResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;

    let mut work_item = WorkItemRepository::find_by_id(&state.pool, work_item_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Work item {} not found", id)))?;

    if let Some(ref requested_type) = req.item_type
        && requested_type != work_item.item_type.as_str()
    {
        log::warn!(
            "Ignoring item_type change {} -> {} for {}",
            work_item.item_type.as_str(),
            requested_type,
            work_item.key
        );
    }

    if let Some(ref title) = req.title {
        if title.trim().is_empty() {
            return Err(ApiError::validation("title must not be empty", Some("title")));
        }
        work_item.title = title.trim().to_string();
    }
    if let Some(ref description) = req.description {
        work_item.description = Some(description.clone());
    }
    if let Some(ref status) = req.status {
        work_item.status = WorkItemStatus::from_str(status)?;
    }
    if let Some(ref priority) = req.priority {
        work_item.priority = Priority::from_str(priority)?;
    }
    if let Some(ref assignee_id) = req.assignee_id {
        work_item.assignee_id = if assignee_id.is_empty() {
            None
        } else {
            let assignee = Uuid::parse_str(assignee_id)?;
            UserRepository::find_by_id(&state.pool, assignee)
                .await?
                .ok_or_else(|| ApiError::not_found(format!("User {} not found", assignee)))?;
            Some(assignee)
        };
    }
    if let Some(spent) = req.time_spent_minutes {
        work_item.time_spent_minutes = spent;
    }
    if let Some(estimate) = req.time_estimate_minutes {
        work_item.time_estimate_minutes = estimate;
    }
    if let Some(cycle) = req.cycle_time_days {
        work_item.cycle_time_days = cycle;
    }

    work_item.updated_at = Utc::now();

    WorkItemRepository::update(&state.pool, &work_item).await?;

    log::info!("Updated work item {}", work_item.key);

    Ok(Json(WorkItemResponse {
        work_item: WorkItemDto::from(work_item),
    }))
}

/// PUT /api/v1/work-items/{id}/status
///
/// Status-only write. An unknown status is rejected with the allowed set
/// and the row is untouched.
pub async fn update_work_item_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Json<WorkItemResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;
    let status = WorkItemStatus::from_str(&req.status)?;

    let updated_at = Utc::now();
    let updated = WorkItemRepository::set_status(&state.pool, work_item_id, status, updated_at)
        .await?;
    if !updated {
        return Err(ApiError::not_found(format!("Work item {} not found", id)));
    }

    let work_item = WorkItemRepository::find_by_id(&state.pool, work_item_id)
        .await?
        .ok_or_else(|| ApiError::internal("Work item vanished after status update"))?;

    log::info!("Work item {} status -> {}", work_item.key, status.as_str());

    Ok(Json(WorkItemResponse {
        work_item: WorkItemDto::from(work_item),
    }))
}

/// PUT /api/v1/work-items/{id}/sprint
///
/// Assigns the item to a sprint, or back to the backlog when `sprint_id`
/// is null.
pub async fn assign_work_item_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AssignSprintRequest>,
) -> ApiResult<Json<WorkItemResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;

    let sprint_id = match req.sprint_id.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => {
            let sprint_id = Uuid::parse_str(raw)?;
            SprintRepository::find_by_id(&state.pool, sprint_id)
                .await?
                .ok_or_else(|| ApiError::not_found(format!("Sprint {} not found", raw)))?;
            Some(sprint_id)
        }
        None => None,
    };

    let updated =
        WorkItemRepository::set_sprint(&state.pool, work_item_id, sprint_id, Utc::now()).await?;
    if !updated {
        return Err(ApiError::not_found(format!("Work item {} not found", id)));
    }

    let work_item = WorkItemRepository::find_by_id(&state.pool, work_item_id)
        .await?
        .ok_or_else(|| ApiError::internal("Work item vanished after sprint assignment"))?;

    Ok(Json(WorkItemResponse {
        work_item: WorkItemDto::from(work_item),
    }))
}

/// DELETE /api/v1/work-items/{id}
///
/// Soft delete. The row keeps its key so restore brings it back verbatim.
pub async fn delete_work_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;

    let deleted = WorkItemRepository::soft_delete(&state.pool, work_item_id).await?;
    if !deleted {
        return Err(ApiError::not_found(format!(
            "Work item {} not found or already deleted",
            id
        )));
    }

    log::info!("Soft-deleted work item {}", work_item_id);

    Ok(Json(DeleteResponse {
        deleted_id: work_item_id.to_string(),
    }))
}

/// POST /api/v1/work-items/{id}/restore
pub async fn restore_work_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkItemResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;

    let restored = WorkItemRepository::restore(&state.pool, work_item_id).await?;
    if !restored {
        return Err(ApiError::not_found(format!("Work item {} not found", id)));
    }

    let work_item = WorkItemRepository::find_by_id(&state.pool, work_item_id)
        .await?
        .ok_or_else(|| ApiError::internal("Work item vanished after restore"))?;

    log::info!("Restored work item {}", work_item.key);

    Ok(Json(WorkItemResponse {
        work_item: WorkItemDto::from(work_item),
    }))
}
