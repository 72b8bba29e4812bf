use pt_core::WorkItem;

use serde::Serialize;

/// Work item DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct WorkItemDto {
    pub id: String,
    pub key: String,
    pub item_type: String,
    pub project_id: String,
    pub sprint_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub assignee_id: Option<String>,
    pub reporter_id: String,
    pub time_spent_minutes: i64,
    pub time_estimate_minutes: i64,
    pub cycle_time_days: f64,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

impl From<WorkItem> for WorkItemDto {
    fn from(w: WorkItem) -> Self {
        Self {
            id: w.id.to_string(),
            key: w.key,
            item_type: w.item_type.as_str().to_string(),
            project_id: w.project_id.to_string(),
            sprint_id: w.sprint_id.map(|id| id.to_string()),
            title: w.title,
            description: w.description,
            status: w.status.as_str().to_string(),
            priority: w.priority.as_str().to_string(),
            assignee_id: w.assignee_id.map(|id| id.to_string()),
            reporter_id: w.reporter_id.to_string(),
            time_spent_minutes: w.time_spent_minutes,
            time_estimate_minutes: w.time_estimate_minutes,
            cycle_time_days: w.cycle_time_days,
            created_at: w.created_at.timestamp(),
            updated_at: w.updated_at.timestamp(),
            deleted_at: w.deleted_at.map(|dt| dt.timestamp()),
        }
    }
}
