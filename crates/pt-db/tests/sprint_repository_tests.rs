mod common;

use common::{create_test_pool, create_test_project, create_test_sprint, create_test_user};

use pt_core::SprintStatus;
use pt_db::{ProjectRepository, SprintRepository};

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_sprint_when_created_then_can_be_found_by_id() {
    // Given: A project to attach the sprint to
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let project = create_test_project(user_id);
    ProjectRepository::new(pool.clone())
        .create(&project)
        .await
        .unwrap();

    let sprint = create_test_sprint(project.id);

    // When: Creating the sprint
    SprintRepository::create(&pool, &sprint).await.unwrap();

    // Then: It comes back in PLANNING
    let found = SprintRepository::find_by_id(&pool, sprint.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.name, eq("Sprint 1"));
    assert_that!(found.status, eq(SprintStatus::Planning));
}

#[tokio::test]
async fn given_sprints_in_two_projects_when_listing_by_project_then_only_its_sprints_return() {
    // Given: Two projects with one sprint each
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let projects = ProjectRepository::new(pool.clone());
    let first = create_test_project(user_id);
    projects.create(&first).await.unwrap();
    let mut second = create_test_project(user_id);
    second.key = "BETA".to_string();
    second.name = "Beta Tracker".to_string();
    projects.create(&second).await.unwrap();

    let sprint_a = create_test_sprint(first.id);
    let sprint_b = create_test_sprint(second.id);
    SprintRepository::create(&pool, &sprint_a).await.unwrap();
    SprintRepository::create(&pool, &sprint_b).await.unwrap();

    // When: Listing sprints scoped to the first project
    let listed = SprintRepository::list(&pool, Some(first.id)).await.unwrap();

    // Then: Only that project's sprint is returned
    assert_that!(listed.len(), eq(1));
    assert_that!(listed[0].id, eq(sprint_a.id));
}

#[tokio::test]
async fn given_planning_sprint_when_status_set_then_uppercase_value_is_stored() {
    // Given: A sprint in PLANNING
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let project = create_test_project(user_id);
    ProjectRepository::new(pool.clone())
        .create(&project)
        .await
        .unwrap();

    let sprint = create_test_sprint(project.id);
    SprintRepository::create(&pool, &sprint).await.unwrap();

    // When: Moving it to IN_PROGRESS
    SprintRepository::set_status(&pool, sprint.id, SprintStatus::InProgress, Utc::now())
        .await
        .unwrap();

    // Then: The stored column holds the canonical uppercase token
    let raw: String = sqlx::query_scalar("SELECT status FROM sprints WHERE id = ?")
        .bind(sprint.id.to_string())
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_that!(raw, eq("IN_PROGRESS"));
}

#[tokio::test]
async fn given_soft_deleted_sprint_when_listing_then_it_is_excluded() {
    // Given: A stored sprint
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let project = create_test_project(user_id);
    ProjectRepository::new(pool.clone())
        .create(&project)
        .await
        .unwrap();

    let sprint = create_test_sprint(project.id);
    SprintRepository::create(&pool, &sprint).await.unwrap();

    // When: Soft-deleting it
    let removed = SprintRepository::soft_delete(&pool, sprint.id).await.unwrap();
    assert_that!(removed, eq(true));

    // Then: The default list no longer contains it, but direct fetch does
    let listed = SprintRepository::list(&pool, Some(project.id)).await.unwrap();
    assert_that!(listed, is_empty());

    let found = SprintRepository::find_by_id(&pool, sprint.id)
        .await
        .unwrap();
    assert_that!(found, some(anything()));
}
