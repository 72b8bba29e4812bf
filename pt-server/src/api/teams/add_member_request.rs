use serde::Deserialize;

/// Request body for POST /teams/{id}/members.
///
/// When `role` is omitted or the generic placeholder "member", the user's
/// own role attribute is used instead.
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: String,
    #[serde(default)]
    pub role: Option<String>,
}
