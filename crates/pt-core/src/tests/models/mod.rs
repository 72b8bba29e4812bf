mod sprint;
mod sprint_status;
mod team_status;
mod work_item;
mod work_item_type;
