use crate::TeamDto;

use serde::Serialize;

/// Single team response
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: TeamDto,
}
