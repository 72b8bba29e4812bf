use serde::Deserialize;

/// Request body for updating a team. Status changes go through the
/// reconciled status endpoint instead.
#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
