#![allow(dead_code)]

use chrono::{Duration, Utc};
use pt_core::{MemberRole, Project, Sprint, Team, TeamMember, WorkItem, WorkItemType};
use uuid::Uuid;

/// Creates a test Project with the key "ACME"
pub fn create_test_project(owner_id: Uuid) -> Project {
    let mut project = Project::new("Acme Tracker".to_string(), "ACME".to_string(), owner_id);
    project.description = Some("Test project".to_string());
    project
}

/// Creates a test WorkItem with a pre-formatted key
pub fn create_test_work_item(
    project_id: Uuid,
    reporter_id: Uuid,
    item_type: WorkItemType,
    key_number: i64,
) -> WorkItem {
    WorkItem::new(
        item_type,
        item_type.format_key("ACME", key_number),
        key_number,
        project_id,
        "Test work item".to_string(),
        Some("Something to do".to_string()),
        reporter_id,
    )
}

/// Creates a two-week test Sprint in PLANNING
pub fn create_test_sprint(project_id: Uuid) -> Sprint {
    let start = Utc::now();
    Sprint::new(
        project_id,
        "Sprint 1".to_string(),
        Some("Ship the walking skeleton".to_string()),
        start,
        start + Duration::days(14),
    )
    .expect("valid sprint window")
}

/// Creates a test Team with a single developer
pub fn create_test_team(user_id: Uuid) -> Team {
    let mut team = Team::new("Platform".to_string(), Some("Core platform team".to_string()));
    team.members.push(TeamMember::new(user_id, MemberRole::Developer));
    team
}
