use serde::Deserialize;

/// Request body for POST /work-items/{id}/dependencies
#[derive(Debug, Deserialize)]
pub struct CreateDependencyRequest {
    pub depends_on_id: String,
}
