use pt_core::Project;

use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub owner_id: String,
    pub start_date: Option<i64>,
    pub target_end_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            key: p.key,
            name: p.name,
            description: p.description,
            status: p.status.as_str().to_string(),
            owner_id: p.owner_id.to_string(),
            start_date: p.start_date.map(|dt| dt.timestamp()),
            target_end_date: p.target_end_date.map(|dt| dt.timestamp()),
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
            deleted_at: p.deleted_at.map(|dt| dt.timestamp()),
        }
    }
}
