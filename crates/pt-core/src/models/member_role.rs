use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role of a user inside a team.
///
/// The literal `"member"` is a generic placeholder, not a role: callers that
/// pass it (or no role at all) get the user's own role attribute instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    ProductOwner,
    ScrumMaster,
    TeamLead,
    #[default]
    Developer,
    Designer,
    Qa,
    Other,
}

impl MemberRole {
    pub const ALL_VALUES: &'static [&'static str] = &[
        "product_owner",
        "scrum_master",
        "team_lead",
        "developer",
        "designer",
        "qa",
        "other",
    ];

    /// Placeholder value that defers to the user's own role.
    pub const PLACEHOLDER: &'static str = "member";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductOwner => "product_owner",
            Self::ScrumMaster => "scrum_master",
            Self::TeamLead => "team_lead",
            Self::Developer => "developer",
            Self::Designer => "designer",
            Self::Qa => "qa",
            Self::Other => "other",
        }
    }
}

impl FromStr for MemberRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "product_owner" => Ok(Self::ProductOwner),
            "scrum_master" => Ok(Self::ScrumMaster),
            "team_lead" => Ok(Self::TeamLead),
            "developer" => Ok(Self::Developer),
            "designer" => Ok(Self::Designer),
            "qa" => Ok(Self::Qa),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidMemberRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
