//! Sprint persistence. Statuses are stored uppercase (PLANNING,
//! IN_PROGRESS, COMPLETED, CANCELLED); lifecycle validation happens in the
//! handlers before a write reaches this layer.

use crate::fields::{opt_timestamp_field, timestamp_field, uuid_field};
use crate::{DbError, error::Result as DbErrorResult};

use pt_core::{Sprint, SprintStatus};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct SprintRepository;

impl SprintRepository {
    pub async fn create<'e, E>(executor: E, sprint: &Sprint) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO sprints (
                    id, project_id, name, goal, status, start_date, end_date,
                    planned_points, completed_points, velocity,
                    created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sprint.id.to_string())
        .bind(sprint.project_id.to_string())
        .bind(&sprint.name)
        .bind(&sprint.goal)
        .bind(sprint.status.as_str())
        .bind(sprint.start_date.timestamp())
        .bind(sprint.end_date.timestamp())
        .bind(sprint.planned_points)
        .bind(sprint.completed_points)
        .bind(sprint.velocity)
        .bind(sprint.created_at.timestamp())
        .bind(sprint.updated_at.timestamp())
        .bind(sprint.deleted_at.map(|dt| dt.timestamp()))
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Direct-by-id fetch ignores the soft-delete flag.
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Sprint>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_SPRINT))
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(|r| decode_sprint(&r)).transpose()
    }

    pub async fn list<'e, E>(executor: E, project_id: Option<Uuid>) -> DbErrorResult<Vec<Sprint>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder = sqlx::QueryBuilder::new(SELECT_SPRINT);
        builder.push(" WHERE deleted_at IS NULL");
        if let Some(project_id) = project_id {
            builder.push(" AND project_id = ");
            builder.push_bind(project_id.to_string());
        }
        builder.push(" ORDER BY start_date");

        let rows = builder.build().fetch_all(executor).await?;

        rows.iter().map(decode_sprint).collect()
    }

    pub async fn update<'e, E>(executor: E, sprint: &Sprint) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE sprints
                SET name = ?, goal = ?, status = ?, start_date = ?, end_date = ?,
                    planned_points = ?, completed_points = ?, velocity = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&sprint.name)
        .bind(&sprint.goal)
        .bind(sprint.status.as_str())
        .bind(sprint.start_date.timestamp())
        .bind(sprint.end_date.timestamp())
        .bind(sprint.planned_points)
        .bind(sprint.completed_points)
        .bind(sprint.velocity)
        .bind(sprint.updated_at.timestamp())
        .bind(sprint.id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn set_status<'e, E>(
        executor: E,
        id: Uuid,
        status: SprintStatus,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE sprints SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(updated_at.timestamp())
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn soft_delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE sprints
                SET deleted_at = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

const SELECT_SPRINT: &str = r#"
    SELECT
        id, project_id, name, goal, status, start_date, end_date,
        planned_points, completed_points, velocity,
        created_at, updated_at, deleted_at
    FROM sprints
"#;

fn decode_sprint(row: &SqliteRow) -> DbErrorResult<Sprint> {
    let id: String = row.try_get("id")?;
    let project_id: String = row.try_get("project_id")?;
    let status: String = row.try_get("status")?;
    let start_date: i64 = row.try_get("start_date")?;
    let end_date: i64 = row.try_get("end_date")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;
    let deleted_at: Option<i64> = row.try_get("deleted_at")?;

    Ok(Sprint {
        id: uuid_field(&id, "sprints.id")?,
        project_id: uuid_field(&project_id, "sprints.project_id")?,
        name: row.try_get("name")?,
        goal: row.try_get("goal")?,
        status: SprintStatus::from_str(&status)
            .map_err(|e| DbError::decode(format!("Invalid sprints.status: {}", e)))?,
        start_date: timestamp_field(start_date, "sprints.start_date")?,
        end_date: timestamp_field(end_date, "sprints.end_date")?,
        planned_points: row.try_get("planned_points")?,
        completed_points: row.try_get("completed_points")?,
        velocity: row.try_get("velocity")?,
        created_at: timestamp_field(created_at, "sprints.created_at")?,
        updated_at: timestamp_field(updated_at, "sprints.updated_at")?,
        deleted_at: opt_timestamp_field(deleted_at, "sprints.deleted_at")?,
    })
}
