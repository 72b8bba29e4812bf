use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Team status, case-normalized to uppercase before comparison and storage.
///
/// Input is accepted case-insensitively ("active" -> ACTIVE); anything
/// outside the closed set is rejected before a write is attempted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamStatus {
    #[default]
    Active,
    Inactive,
    OnHold,
}

impl TeamStatus {
    pub const ALL_VALUES: &'static [&'static str] = &["ACTIVE", "INACTIVE", "ON_HOLD"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::OnHold => "ON_HOLD",
        }
    }
}

impl FromStr for TeamStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "ON_HOLD" => Ok(Self::OnHold),
            _ => Err(CoreError::InvalidTeamStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
