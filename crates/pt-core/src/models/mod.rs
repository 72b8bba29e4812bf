pub mod member_role;
pub mod priority;
pub mod project;
pub mod project_status;
pub mod sprint;
pub mod sprint_status;
pub mod team;
pub mod team_member;
pub mod team_status;
pub mod user;
pub mod work_item;
pub mod work_item_status;
pub mod work_item_type;
