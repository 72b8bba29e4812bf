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
        dependency_list_response::DependencyListResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::UserId,
    projects::{
        create_project_request::CreateProjectRequest, project_dto::ProjectDto,
        project_list_response::ProjectListResponse, project_response::ProjectResponse,
        update_project_request::UpdateProjectRequest,
    },
    sprints::{
        create_sprint_request::CreateSprintRequest, sprint_dto::SprintDto,
        sprint_list_response::SprintListResponse, sprint_response::SprintResponse,
        sprint_status_request::SprintStatusRequest, update_sprint_request::UpdateSprintRequest,
    },
    teams::{
        add_member_request::AddMemberRequest,
        create_team_request::CreateTeamRequest,
        member_list_response::MemberListResponse,
        team_dto::{TeamDto, TeamMemberDto},
        team_list_response::TeamListResponse,
        team_response::TeamResponse,
        team_status_request::TeamStatusRequest,
        update_team_request::UpdateTeamRequest,
    },
    users::{
        create_user_request::CreateUserRequest, user_dto::UserDto, user_response::UserResponse,
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
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = pt_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = pt_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pt-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and schema
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = pt_db::connection::connect(
        &database_path,
        config.database.max_connections,
        Duration::from_secs(config.database.busy_timeout_secs),
    )
    .await?;

    info!("Database ready");

    // Prometheus recorder; /metrics renders from this handle
    let metrics_handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Failed to install metrics recorder: {}", e);
            None
        }
    };

    // Build router
    let app = build_router(AppState::new(pool, metrics_handle));

    // Create TCP listener
    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;

    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
