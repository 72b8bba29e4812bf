//! User REST API handlers (minimal: identity comes from the X-User-Id
//! header, these endpoints exist for provisioning and lookups)

use crate::{ApiError, ApiResult, CreateUserRequest, UserDto, UserResponse};
use crate::AppState;

use pt_core::{MemberRole, User};
use pt_db::UserRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use std::str::FromStr;
use uuid::Uuid;

/// POST /api/v1/users
///
/// Duplicate email is a 409 via the UNIQUE constraint.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be empty", Some("name")));
    }
    if req.email.trim().is_empty() {
        return Err(ApiError::validation("email must not be empty", Some("email")));
    }

    let role = match req.role.as_deref() {
        Some(raw) => MemberRole::from_str(raw)?,
        None => MemberRole::default(),
    };

    let user = User::new(req.name.trim().to_string(), req.email.trim().to_string(), role);

    UserRepository::create(&state.pool, &user).await?;

    log::info!("Created user {} ({})", user.email, user.id);

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let user = UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}
