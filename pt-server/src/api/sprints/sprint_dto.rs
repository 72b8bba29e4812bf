use pt_core::Sprint;

use serde::Serialize;

/// Sprint DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct SprintDto {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub goal: Option<String>,
    pub status: String,
    pub start_date: i64,
    pub end_date: i64,
    pub planned_points: i64,
    pub completed_points: i64,
    pub velocity: f64,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

impl From<Sprint> for SprintDto {
    fn from(s: Sprint) -> Self {
        Self {
            id: s.id.to_string(),
            project_id: s.project_id.to_string(),
            name: s.name,
            goal: s.goal,
            status: s.status.as_str().to_string(),
            start_date: s.start_date.timestamp(),
            end_date: s.end_date.timestamp(),
            planned_points: s.planned_points,
            completed_points: s.completed_points,
            velocity: s.velocity,
            created_at: s.created_at.timestamp(),
            updated_at: s.updated_at.timestamp(),
            deleted_at: s.deleted_at.map(|dt| dt.timestamp()),
        }
    }
}
