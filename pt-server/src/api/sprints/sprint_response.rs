use crate::SprintDto;

use serde::Serialize;

/// Single sprint response
#[derive(Debug, Serialize)]
pub struct SprintResponse {
    pub sprint: SprintDto,
}
