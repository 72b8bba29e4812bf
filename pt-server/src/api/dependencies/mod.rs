pub mod create_dependency_request;
pub mod dependencies;
pub mod dependency_list_response;
