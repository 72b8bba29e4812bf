use serde::Deserialize;

/// Request body for updating a sprint. Status changes go through the
/// dedicated status endpoint, not here.
#[derive(Debug, Deserialize)]
pub struct UpdateSprintRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub start_date: Option<i64>,
    #[serde(default)]
    pub end_date: Option<i64>,
    #[serde(default)]
    pub planned_points: Option<i64>,
    #[serde(default)]
    pub completed_points: Option<i64>,
    #[serde(default)]
    pub velocity: Option<f64>,
}
