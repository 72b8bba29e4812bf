use crate::SprintDto;

use serde::Serialize;

/// List of sprints response
#[derive(Debug, Serialize)]
pub struct SprintListResponse {
    pub sprints: Vec<SprintDto>,
}
