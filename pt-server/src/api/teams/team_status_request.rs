use serde::Deserialize;

/// Request body for PUT /teams/{id}/status. The value is case-insensitive;
/// storage is always the canonical uppercase token.
#[derive(Debug, Deserialize)]
pub struct TeamStatusRequest {
    pub status: String,
}
