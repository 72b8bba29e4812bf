use serde::Deserialize;

/// Query parameters for listing work items
#[derive(Debug, Deserialize)]
pub struct ListWorkItemsQuery {
    pub project_id: Option<String>,
    pub item_type: Option<String>,
    pub status: Option<String>,
    pub sprint_id: Option<String>,
}
