use crate::{CoreError, CoreResult, SprintStatus};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub id: Uuid,
    pub project_id: Uuid,

    pub name: String,
    pub goal: Option<String>,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    pub status: SprintStatus,

    // Metrics
    pub planned_points: i64,
    pub completed_points: i64,
    pub velocity: f64,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Sprint {
    /// Build a new sprint in PLANNING. Fails when the window is empty or
    /// inverted (`start_date >= end_date`).
    #[track_caller]
    pub fn new(
        project_id: Uuid,
        name: String,
        goal: Option<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> CoreResult<Self> {
        validate_window(start_date, end_date)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            project_id,
            name,
            goal,
            start_date,
            end_date,
            status: SprintStatus::Planning,
            planned_points: 0,
            completed_points: 0,
            velocity: 0.0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Re-check the date invariant after a partial update.
    #[track_caller]
    pub fn validate_dates(&self) -> CoreResult<()> {
        validate_window(self.start_date, self.end_date)
    }
}

#[track_caller]
fn validate_window(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> CoreResult<()> {
    if start_date >= end_date {
        return Err(CoreError::Validation {
            message: "start_date must be before end_date".to_string(),
            field: Some("start_date".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
