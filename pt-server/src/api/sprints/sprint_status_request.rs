use serde::Deserialize;

/// Request body for PUT /sprints/{id}/status
#[derive(Debug, Deserialize)]
pub struct SprintStatusRequest {
    pub status: String,
}
