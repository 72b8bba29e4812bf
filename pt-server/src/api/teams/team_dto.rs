use pt_core::{Team, TeamMember};

use serde::Serialize;

/// Team member DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct TeamMemberDto {
    pub user_id: String,
    pub role: String,
    pub joined_at: i64,
}

impl From<TeamMember> for TeamMemberDto {
    fn from(m: TeamMember) -> Self {
        Self {
            user_id: m.user_id.to_string(),
            role: m.role.as_str().to_string(),
            joined_at: m.joined_at.timestamp(),
        }
    }
}

/// Team DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub members: Vec<TeamMemberDto>,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

impl From<Team> for TeamDto {
    fn from(t: Team) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name,
            description: t.description,
            status: t.status.as_str().to_string(),
            members: t.members.into_iter().map(TeamMemberDto::from).collect(),
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
            deleted_at: t.deleted_at.map(|dt| dt.timestamp()),
        }
    }
}
