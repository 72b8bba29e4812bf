pub mod create_sprint_request;
pub mod sprint_dto;
pub mod sprint_list_response;
pub mod sprint_response;
pub mod sprint_status_request;
pub mod sprints;
pub mod update_sprint_request;
