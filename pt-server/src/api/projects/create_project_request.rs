use serde::Deserialize;

/// Request body for creating a project. Dates are unix seconds.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<i64>,
    #[serde(default)]
    pub target_end_date: Option<i64>,
}
