use crate::TeamDto;

use serde::Serialize;

/// List of teams response
#[derive(Debug, Serialize)]
pub struct TeamListResponse {
    pub teams: Vec<TeamDto>,
}
