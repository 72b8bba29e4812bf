use serde::Serialize;

/// Response body for soft-delete endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
