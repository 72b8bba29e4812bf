#![allow(dead_code)]

//! Test infrastructure for pt-server API tests

use pt_server::AppState;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/pt-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing (no metrics recorder)
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::new(pool, None)
}

/// Create a test user
pub async fn create_test_user(pool: &SqlitePool, user_id: &str) {
    let now = Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO users (id, name, email, role, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind("Test User")
    .bind(format!("{}@test.local", user_id))
    .bind("developer")
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test user");
}

/// Create a test user with a specific role
pub async fn create_test_user_with_role(pool: &SqlitePool, user_id: &str, role: &str) {
    let now = Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO users (id, name, email, role, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind("Test User")
    .bind(format!("{}@test.local", user_id))
    .bind(role)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test user");
}

/// Create a test project with the key "ACME", returning its id
pub async fn create_test_project(pool: &SqlitePool, owner_id: &str) -> Uuid {
    let project_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO projects (id, key, name, status, owner_id, created_at, updated_at)
            VALUES (?, 'ACME', 'Acme Tracker', 'active', ?, ?, ?)
        "#,
    )
    .bind(project_id.to_string())
    .bind(owner_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test project");

    project_id
}

/// Create a test team, returning its id
pub async fn create_test_team(pool: &SqlitePool) -> Uuid {
    let team_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO teams (id, name, status, created_at, updated_at) VALUES (?, 'Platform', 'ACTIVE', ?, ?)",
    )
    .bind(team_id.to_string())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test team");

    team_id
}
