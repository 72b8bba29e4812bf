pub mod delete_response;
pub mod dependencies;
pub mod error;
pub mod extractors;
pub mod projects;
pub mod sprints;
pub mod teams;
pub mod users;
pub mod work_items;
