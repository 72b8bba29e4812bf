use serde::Deserialize;

/// Request body for updating a work item.
///
/// `item_type` is accepted but ignored: the type decides the key prefix and
/// is fixed at creation time.
#[derive(Debug, Deserialize)]
pub struct UpdateWorkItemRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub time_spent_minutes: Option<i64>,
    #[serde(default)]
    pub time_estimate_minutes: Option<i64>,
    #[serde(default)]
    pub cycle_time_days: Option<f64>,
}
