//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use pt_core::CoreError;
use pt_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional detail fields
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Acceptable values when a closed enum rejected the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    /// What the caller asked for, on consistency failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<String>,
    /// What the database last reported, on consistency failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_observed: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        allowed_values: Option<Vec<String>>,
        location: ErrorLocation,
    },

    /// Uniqueness conflict, e.g. duplicate key or member (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// A verified write never converged on the requested value (500)
    #[error("Consistency failure: requested {requested}, last observed {last_observed:?} {location}")]
    Consistency {
        requested: String,
        last_observed: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            allowed_values: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                    allowed_values: None,
                    requested: None,
                    last_observed: None,
                },
            ),
            ApiError::Validation {
                message,
                field,
                allowed_values,
                ..
            } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                    allowed_values,
                    requested: None,
                    last_observed: None,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                    allowed_values: None,
                    requested: None,
                    last_observed: None,
                },
            ),
            ApiError::Consistency {
                requested,
                last_observed,
                ..
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "CONSISTENCY_ERROR".into(),
                    message: "Status update could not be verified".into(),
                    field: None,
                    allowed_values: None,
                    requested: Some(requested),
                    last_observed,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                    allowed_values: None,
                    requested: None,
                    last_observed: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        match e {
            sqlx::Error::RowNotFound => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            allowed_values: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain validation errors to API errors.
///
/// Enum-parse failures carry the acceptable value set into the response
/// body so clients can correct the request without a docs lookup.
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let allowed_values = e
            .allowed_values()
            .map(|values| values.iter().map(|v| v.to_string()).collect());

        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                allowed_values: None,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidWorkItemType { value, .. } => ApiError::Validation {
                message: format!("Invalid item_type: {}", value),
                field: Some("item_type".into()),
                allowed_values,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidWorkItemStatus { value, .. }
            | CoreError::InvalidProjectStatus { value, .. }
            | CoreError::InvalidSprintStatus { value, .. }
            | CoreError::InvalidTeamStatus { value, .. } => ApiError::Validation {
                message: format!("Invalid status: {}", value),
                field: Some("status".into()),
                allowed_values,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidSprintTransition { from, to, .. } => ApiError::Validation {
                message: format!("Sprint cannot move from {} to {}", from, to),
                field: Some("status".into()),
                allowed_values: None,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidPriority { value, .. } => ApiError::Validation {
                message: format!("Invalid priority: {}", value),
                field: Some("priority".into()),
                allowed_values,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidMemberRole { value, .. } => ApiError::Validation {
                message: format!("Invalid role: {}", value),
                field: Some("role".into()),
                allowed_values,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        match e {
            DbError::Duplicate { message, .. } => ApiError::Conflict {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Consistency {
                requested,
                last_observed,
                ..
            } => ApiError::Consistency {
                requested,
                last_observed,
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx { source, .. } => match source {
                sqlx::Error::RowNotFound => ApiError::NotFound {
                    message: "Resource not found".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            },
            DbError::Decode { .. } | DbError::Migration { .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
