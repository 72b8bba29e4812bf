use crate::{CoreError, CoreResult, Priority};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Variant tag of the polymorphic work item entity.
///
/// All variants share one schema; the tag selects the key prefix and the
/// default priority. The tag is immutable once a work item is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkItemType {
    Epic,
    Story,
    Task,
    Defect,
    Feature,
}

impl WorkItemType {
    pub const ALL_VALUES: &'static [&'static str] =
        &["epic", "story", "task", "defect", "feature"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Epic => "epic",
            Self::Story => "story",
            Self::Task => "task",
            Self::Defect => "defect",
            Self::Feature => "feature",
        }
    }

    /// Key segment between the project key and the numeric suffix.
    /// Stories keep the bare `PROJ-N` form.
    pub fn key_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Story => None,
            Self::Task => Some("TASK"),
            Self::Defect => Some("BUG"),
            Self::Feature => Some("FEAT"),
            Self::Epic => Some("EPIC"),
        }
    }

    /// Defects are triaged at high priority unless the caller says otherwise.
    pub fn default_priority(&self) -> Priority {
        match self {
            Self::Defect => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Render the human-readable key for a numeric suffix, e.g. `ACME-7`
    /// or `ACME-BUG-7`.
    pub fn format_key(&self, project_key: &str, number: i64) -> String {
        match self.key_prefix() {
            Some(prefix) => format!("{}-{}-{}", project_key, prefix, number),
            None => format!("{}-{}", project_key, number),
        }
    }
}

impl FromStr for WorkItemType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "epic" => Ok(Self::Epic),
            "story" => Ok(Self::Story),
            "task" => Ok(Self::Task),
            "defect" => Ok(Self::Defect),
            "feature" => Ok(Self::Feature),
            _ => Err(CoreError::InvalidWorkItemType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for WorkItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
