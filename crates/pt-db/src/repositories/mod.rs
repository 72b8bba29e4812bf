mod dependency_repository;
mod project_repository;
mod sprint_repository;
mod team_repository;
mod user_repository;
mod work_item_repository;

pub use dependency_repository::DependencyRepository;
pub use project_repository::ProjectRepository;
pub use sprint_repository::SprintRepository;
pub use team_repository::TeamRepository;
pub use user_repository::UserRepository;
pub use work_item_repository::{WorkItemFilter, WorkItemRepository};
