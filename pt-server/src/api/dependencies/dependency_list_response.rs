use serde::Serialize;

/// IDs of the work items an item depends on
#[derive(Debug, Serialize)]
pub struct DependencyListResponse {
    pub work_item_id: String,
    pub depends_on: Vec<String>,
}
