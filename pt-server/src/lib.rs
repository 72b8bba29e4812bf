pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    delete_response::DeleteResponse,
    dependencies::{
        create_dependency_request::CreateDependencyRequest,
        dependencies::{create_dependency, delete_dependency, list_dependencies},
        dependency_list_response::DependencyListResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::UserId,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
    sprints::{
        create_sprint_request::CreateSprintRequest,
        sprint_dto::SprintDto,
        sprint_list_response::SprintListResponse,
        sprint_response::SprintResponse,
        sprint_status_request::SprintStatusRequest,
        sprints::{
            create_sprint, delete_sprint, get_sprint, list_sprints, update_sprint,
            update_sprint_status,
        },
        update_sprint_request::UpdateSprintRequest,
    },
    teams::{
        add_member_request::AddMemberRequest,
        create_team_request::CreateTeamRequest,
        member_list_response::MemberListResponse,
        team_dto::{TeamDto, TeamMemberDto},
        team_list_response::TeamListResponse,
        team_response::TeamResponse,
        team_status_request::TeamStatusRequest,
        teams::{
            add_member, create_team, delete_team, get_team, list_members, list_teams,
            remove_member, update_team, update_team_status,
        },
        update_team_request::UpdateTeamRequest,
    },
    users::{
        create_user_request::CreateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{create_user, get_user},
    },
    work_items::{
        assign_sprint_request::AssignSprintRequest,
        create_work_item_request::CreateWorkItemRequest,
        list_work_item_query::ListWorkItemsQuery,
        update_status_request::UpdateStatusRequest,
        update_work_item_request::UpdateWorkItemRequest,
        work_item_dto::WorkItemDto,
        work_item_list_response::WorkItemListResponse,
        work_item_response::WorkItemResponse,
        work_items::{
            assign_work_item_sprint, create_work_item, delete_work_item, get_work_item,
            list_work_items, restore_work_item, update_work_item, update_work_item_status,
        },
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
