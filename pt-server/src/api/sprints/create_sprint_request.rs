use serde::Deserialize;

/// Request body for creating a sprint. Dates are unix seconds and the
/// window must satisfy `start_date < end_date`.
#[derive(Debug, Deserialize)]
pub struct CreateSprintRequest {
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub goal: Option<String>,
    pub start_date: i64,
    pub end_date: i64,
}
