pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::member_role::MemberRole;
pub use models::priority::Priority;
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use models::sprint::Sprint;
pub use models::sprint_status::SprintStatus;
pub use models::team::Team;
pub use models::team_member::TeamMember;
pub use models::team_status::TeamStatus;
pub use models::user::User;
pub use models::work_item::WorkItem;
pub use models::work_item_status::WorkItemStatus;
pub use models::work_item_type::WorkItemType;
