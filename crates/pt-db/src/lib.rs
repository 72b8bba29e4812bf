pub mod connection;
pub mod error;
pub mod reconcile;
pub mod repositories;

mod fields;

pub use error::{DbError, Result};
pub use reconcile::TeamStatusReconciler;
pub use repositories::{
    DependencyRepository, ProjectRepository, SprintRepository, TeamRepository, UserRepository,
    WorkItemFilter, WorkItemRepository,
};
