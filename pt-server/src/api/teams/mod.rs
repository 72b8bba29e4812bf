pub mod add_member_request;
pub mod create_team_request;
pub mod member_list_response;
pub mod team_dto;
pub mod team_list_response;
pub mod team_response;
pub mod team_status_request;
pub mod teams;
pub mod update_team_request;
