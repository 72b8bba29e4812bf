mod common;

use common::{create_test_pool, create_test_project, create_test_user, create_test_work_item};

use pt_core::WorkItemType;
use pt_db::{DbError, ProjectRepository, WorkItemRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_project_when_created_then_can_be_found_by_key() {
    // Given: A fresh database with an owner
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let project = create_test_project(user_id);

    // When: Creating the project
    let projects = ProjectRepository::new(pool.clone());
    projects.create(&project).await.unwrap();

    // Then: Lookup by key returns it
    let found = projects.find_by_key("ACME").await.unwrap().unwrap();
    assert_that!(found.id, eq(project.id));
    assert_that!(found.name, eq("Acme Tracker"));
}

#[tokio::test]
async fn given_existing_key_when_second_project_uses_it_then_returns_duplicate() {
    // Given: A project with key ACME
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let projects = ProjectRepository::new(pool.clone());
    projects.create(&create_test_project(user_id)).await.unwrap();

    // When: Creating another project with the same key
    let result = projects.create(&create_test_project(user_id)).await;

    // Then: The UNIQUE constraint rejects it
    assert_that!(result, err(matches_pattern!(DbError::Duplicate { .. })));
}

#[tokio::test]
async fn given_soft_deleted_project_when_listing_then_it_is_excluded_but_items_remain() {
    // Given: A project with one work item
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let projects = ProjectRepository::new(pool.clone());
    let project = create_test_project(user_id);
    projects.create(&project).await.unwrap();

    let item = create_test_work_item(project.id, user_id, WorkItemType::Story, 1);
    WorkItemRepository::create(&pool, &item).await.unwrap();

    // When: Soft-deleting the project
    let removed = projects.soft_delete(project.id).await.unwrap();
    assert_that!(removed, eq(true));

    // Then: The project leaves the list but its work item is untouched
    assert_that!(projects.list().await.unwrap(), is_empty());
    let found = WorkItemRepository::find_by_id(&pool, item.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.deleted_at, none());
}

#[tokio::test]
async fn given_existing_project_when_updated_then_key_is_unchanged() {
    // Given: A stored project
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let projects = ProjectRepository::new(pool.clone());
    let mut project = create_test_project(user_id);
    projects.create(&project).await.unwrap();

    // When: Renaming it and attempting to change the key
    project.name = "Acme Next".to_string();
    project.key = "NEXT".to_string();
    projects.update(&project).await.unwrap();

    // Then: The name changed, the key did not
    let found = projects.find_by_id(project.id).await.unwrap().unwrap();
    assert_that!(found.name, eq("Acme Next"));
    assert_that!(found.key, eq("ACME"));
}
