use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid work item type: {value} {location}")]
    InvalidWorkItemType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid work item status: {value} {location}")]
    InvalidWorkItemStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sprint status: {value} {location}")]
    InvalidSprintStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sprint status transition: {from} -> {to} {location}")]
    InvalidSprintTransition {
        from: String,
        to: String,
        location: ErrorLocation,
    },

    #[error("Invalid team status: {value} {location}")]
    InvalidTeamStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid member role: {value} {location}")]
    InvalidMemberRole {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// The set of acceptable values for enum-parse failures, so callers can
    /// surface it in error payloads.
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::InvalidWorkItemType { .. } => Some(crate::WorkItemType::ALL_VALUES),
            Self::InvalidWorkItemStatus { .. } => Some(crate::WorkItemStatus::ALL_VALUES),
            Self::InvalidPriority { .. } => Some(crate::Priority::ALL_VALUES),
            Self::InvalidProjectStatus { .. } => Some(crate::ProjectStatus::ALL_VALUES),
            Self::InvalidSprintStatus { .. } => Some(crate::SprintStatus::ALL_VALUES),
            Self::InvalidTeamStatus { .. } => Some(crate::TeamStatus::ALL_VALUES),
            Self::InvalidMemberRole { .. } => Some(crate::MemberRole::ALL_VALUES),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
