pub mod assign_sprint_request;
pub mod create_work_item_request;
pub mod list_work_item_query;
pub mod update_status_request;
pub mod update_work_item_request;
pub mod work_item_dto;
pub mod work_item_list_response;
pub mod work_item_response;
pub mod work_items;
