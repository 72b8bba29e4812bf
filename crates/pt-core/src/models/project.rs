//! Project entity - organizational container for work items and sprints.

use crate::{CoreError, CoreResult, ProjectStatus};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project owns its work items and sprints by reference.
///
/// Deleting a project does NOT cascade to its items; orphaned items stay
/// retrievable by id. That limitation is deliberate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Unique short identifier (e.g., "ACME", "WEBAPP"); prefix of every
    /// work item key in the project.
    pub key: String,
    pub status: ProjectStatus,
    pub owner_id: Uuid,
    pub start_date: Option<DateTime<Utc>>,
    pub target_end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(name: String, key: String, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            key,
            status: ProjectStatus::Active,
            owner_id,
            start_date: None,
            target_end_date: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// `start_date <= target_end_date` whenever both are set. Enforced on
    /// every create/update path.
    #[track_caller]
    pub fn validate_dates(&self) -> CoreResult<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.target_end_date)
            && start > end
        {
            return Err(CoreError::Validation {
                message: "start_date must not be after target_end_date".to_string(),
                field: Some("start_date".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
