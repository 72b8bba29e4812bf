use serde::Deserialize;

/// Request body for PUT /work-items/{id}/sprint.
///
/// `sprint_id: null` (or absent) moves the item back to the backlog.
#[derive(Debug, Deserialize)]
pub struct AssignSprintRequest {
    #[serde(default)]
    pub sprint_id: Option<String>,
}
