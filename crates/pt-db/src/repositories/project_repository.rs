//! Project persistence.
//!
//! Project deletion is soft and does NOT cascade to work items or sprints;
//! orphaned items stay retrievable by id. That is deliberate.

use crate::fields::{opt_timestamp_field, timestamp_field, uuid_field};
use crate::{DbError, error::Result as DbErrorResult};

use pt_core::{Project, ProjectStatus};

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO projects (
                    id, key, name, description, status, owner_id,
                    start_date, target_end_date, created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.key)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.owner_id.to_string())
        .bind(project.start_date.map(|dt| dt.timestamp()))
        .bind(project.target_end_date.map(|dt| dt.timestamp()))
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .bind(project.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Ignores the soft-delete flag; restore flows and key allocation both
    /// need deleted projects to resolve.
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_PROJECT))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| decode_project(&r)).transpose()
    }

    pub async fn find_by_key(&self, key: &str) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!("{} WHERE key = ?", SELECT_PROJECT))
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| decode_project(&r)).transpose()
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "{} WHERE deleted_at IS NULL ORDER BY key",
            SELECT_PROJECT
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_project).collect()
    }

    /// `key` is immutable once assigned; it never appears in the SET list.
    pub async fn update(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE projects
                SET name = ?, description = ?, status = ?, owner_id = ?,
                    start_date = ?, target_end_date = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.owner_id.to_string())
        .bind(project.start_date.map(|dt| dt.timestamp()))
        .bind(project.target_end_date.map(|dt| dt.timestamp()))
        .bind(project.updated_at.timestamp())
        .bind(project.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn soft_delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE projects
                SET deleted_at = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

const SELECT_PROJECT: &str = r#"
    SELECT
        id, key, name, description, status, owner_id,
        start_date, target_end_date, created_at, updated_at, deleted_at
    FROM projects
"#;

fn decode_project(row: &SqliteRow) -> DbErrorResult<Project> {
    let id: String = row.try_get("id")?;
    let status: String = row.try_get("status")?;
    let owner_id: String = row.try_get("owner_id")?;
    let start_date: Option<i64> = row.try_get("start_date")?;
    let target_end_date: Option<i64> = row.try_get("target_end_date")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;
    let deleted_at: Option<i64> = row.try_get("deleted_at")?;

    Ok(Project {
        id: uuid_field(&id, "projects.id")?,
        key: row.try_get("key")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        status: ProjectStatus::from_str(&status)
            .map_err(|e| DbError::decode(format!("Invalid projects.status: {}", e)))?,
        owner_id: uuid_field(&owner_id, "projects.owner_id")?,
        start_date: opt_timestamp_field(start_date, "projects.start_date")?,
        target_end_date: opt_timestamp_field(target_end_date, "projects.target_end_date")?,
        created_at: timestamp_field(created_at, "projects.created_at")?,
        updated_at: timestamp_field(updated_at, "projects.updated_at")?,
        deleted_at: opt_timestamp_field(deleted_at, "projects.deleted_at")?,
    })
}
