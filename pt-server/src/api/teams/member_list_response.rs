use crate::TeamMemberDto;

use serde::Serialize;

/// Team roster response
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub team_id: String,
    pub members: Vec<TeamMemberDto>,
}
