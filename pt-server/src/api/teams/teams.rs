//! Team REST API handlers
//!
//! Status changes run through the consistency reconciler: the new value is
//! written, read back, and escalated through alternate write paths until
//! the stored value matches the request.

use crate::{
    AddMemberRequest, ApiError, ApiResult, CreateTeamRequest, DeleteResponse, MemberListResponse,
    TeamDto, TeamListResponse, TeamMemberDto, TeamResponse, TeamStatusRequest, UpdateTeamRequest,
};
use crate::AppState;

use pt_core::{MemberRole, Team, TeamMember, TeamStatus};
use pt_db::{TeamRepository, TeamStatusReconciler, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use metrics::counter;
use std::str::FromStr;
use uuid::Uuid;

/// POST /api/v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> ApiResult<Json<TeamResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be empty", Some("name")));
    }

    let team = Team::new(req.name.trim().to_string(), req.description);

    TeamRepository::new(state.pool.clone()).create(&team).await?;

    log::info!("Created team {} ({})", team.name, team.id);

    Ok(Json(TeamResponse {
        team: TeamDto::from(team),
    }))
}

/// GET /api/v1/teams
pub async fn list_teams(State(state): State<AppState>) -> ApiResult<Json<TeamListResponse>> {
    let teams = TeamRepository::new(state.pool.clone()).list().await?;

    Ok(Json(TeamListResponse {
        teams: teams.into_iter().map(TeamDto::from).collect(),
    }))
}

/// GET /api/v1/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TeamResponse>> {
    let team_id = Uuid::parse_str(&id)?;

    let team = TeamRepository::new(state.pool.clone())
        .find_by_id(team_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team {} not found", id)))?;

    Ok(Json(TeamResponse {
        team: TeamDto::from(team),
    }))
}

/// PUT /api/v1/teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTeamRequest>,
) -> ApiResult<Json<TeamResponse>> {
    let team_id = Uuid::parse_str(&id)?;
    let teams = TeamRepository::new(state.pool.clone());

    let mut team = teams
        .find_by_id(team_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team {} not found", id)))?;

    if let Some(ref name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name must not be empty", Some("name")));
        }
        team.name = name.trim().to_string();
    }
    if let Some(ref description) = req.description {
        team.description = Some(description.clone());
    }

    team.updated_at = Utc::now();
    teams.update(&team).await?;

    log::info!("Updated team {}", team.id);

    Ok(Json(TeamResponse {
        team: TeamDto::from(team),
    }))
}

/// PUT /api/v1/teams/{id}/status
///
/// Reconciled status update: the request only succeeds once a re-read of
/// the persisted column matches the requested value.
pub async fn update_team_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TeamStatusRequest>,
) -> ApiResult<Json<TeamResponse>> {
    let team_id = Uuid::parse_str(&id)?;
    let requested = TeamStatus::from_str(&req.status)?;

    let teams = TeamRepository::new(state.pool.clone());
    let team = teams
        .find_by_id(team_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team {} not found", id)))?;

    let updated = TeamStatusReconciler::new(&teams)
        .set_status(&team, requested)
        .await?;

    counter!("team_status_reconciliations_total").increment(1);
    log::info!("Team {} status -> {}", team_id, requested.as_str());

    Ok(Json(TeamResponse {
        team: TeamDto::from(updated),
    }))
}

/// DELETE /api/v1/teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let team_id = Uuid::parse_str(&id)?;

    let deleted = TeamRepository::new(state.pool.clone())
        .soft_delete(team_id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!(
            "Team {} not found or already deleted",
            id
        )));
    }

    log::info!("Soft-deleted team {}", team_id);

    Ok(Json(DeleteResponse {
        deleted_id: team_id.to_string(),
    }))
}

/// GET /api/v1/teams/{id}/members
pub async fn list_members(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MemberListResponse>> {
    let team_id = Uuid::parse_str(&id)?;
    let teams = TeamRepository::new(state.pool.clone());

    teams
        .find_by_id(team_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team {} not found", id)))?;

    let members = teams.members(team_id).await?;

    Ok(Json(MemberListResponse {
        team_id: team_id.to_string(),
        members: members.into_iter().map(TeamMemberDto::from).collect(),
    }))
}

/// POST /api/v1/teams/{id}/members
///
/// Adds a user to the roster. An omitted role, or the generic placeholder
/// "member", falls back to the user's own role attribute. A duplicate
/// membership is a 409, backstopped by the composite primary key.
pub async fn add_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddMemberRequest>,
) -> ApiResult<Json<MemberListResponse>> {
    let team_id = Uuid::parse_str(&id)?;
    let user_id = Uuid::parse_str(&req.user_id)?;

    let teams = TeamRepository::new(state.pool.clone());
    teams
        .find_by_id(team_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team {} not found", id)))?;

    let user = UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", req.user_id)))?;

    let role = match req.role.as_deref() {
        None | Some(MemberRole::PLACEHOLDER) => user.role,
        Some(raw) => MemberRole::from_str(raw)?,
    };

    teams
        .add_member(team_id, &TeamMember::new(user_id, role))
        .await?;

    log::info!(
        "Added member {} to team {} as {}",
        user_id,
        team_id,
        role.as_str()
    );

    let members = teams.members(team_id).await?;
    Ok(Json(MemberListResponse {
        team_id: team_id.to_string(),
        members: members.into_iter().map(TeamMemberDto::from).collect(),
    }))
}

/// DELETE /api/v1/teams/{id}/members/{user_id}
pub async fn remove_member(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let team_id = Uuid::parse_str(&id)?;
    let member_id = Uuid::parse_str(&user_id)?;

    let removed = TeamRepository::new(state.pool.clone())
        .remove_member(team_id, member_id)
        .await?;
    if !removed {
        return Err(ApiError::not_found(format!(
            "User {} is not a member of team {}",
            user_id, id
        )));
    }

    log::info!("Removed member {} from team {}", member_id, team_id);

    Ok(Json(DeleteResponse {
        deleted_id: member_id.to_string(),
    }))
}
