use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Sprint lifecycle status, stored uppercase.
///
/// Forward-only: PLANNING -> IN_PROGRESS -> COMPLETED, with CANCELLED
/// reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SprintStatus {
    #[default]
    Planning,
    InProgress,
    Completed,
    Cancelled,
}

impl SprintStatus {
    pub const ALL_VALUES: &'static [&'static str] =
        &["PLANNING", "IN_PROGRESS", "COMPLETED", "CANCELLED"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "PLANNING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    pub fn can_transition_to(&self, next: SprintStatus) -> bool {
        if *self == next {
            return true;
        }
        match (self, next) {
            (Self::Planning, Self::InProgress) => true,
            (Self::InProgress, Self::Completed) => true,
            (from, Self::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }

    /// Validate a transition request, keeping the from/to pair for the
    /// error payload.
    #[track_caller]
    pub fn transition_to(&self, next: SprintStatus) -> CoreResult<SprintStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidSprintTransition {
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl FromStr for SprintStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PLANNING" => Ok(Self::Planning),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(CoreError::InvalidSprintStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
