use serde::Deserialize;

/// Request body for PUT /work-items/{id}/status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}
