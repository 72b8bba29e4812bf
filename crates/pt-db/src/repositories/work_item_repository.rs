//! Work item persistence.
//!
//! Key numbers are allocated with a MAX+1 scan inside the create
//! transaction, scoped to (project, item_type). Soft-deleted rows keep
//! their key_number, so keys are never reused and the scan must NOT filter
//! on deleted_at. The UNIQUE index on `key` backstops concurrent
//! allocations: the losing insert surfaces as `DbError::Duplicate`.

use crate::fields::{opt_timestamp_field, opt_uuid_field, timestamp_field, uuid_field};
use crate::{DbError, error::Result as DbErrorResult};

use pt_core::{Priority, WorkItem, WorkItemStatus, WorkItemType};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

/// Optional filters for default list queries. Soft-deleted rows are always
/// excluded before these apply.
#[derive(Debug, Clone, Default)]
pub struct WorkItemFilter {
    pub project_id: Option<Uuid>,
    pub sprint_id: Option<Uuid>,
    pub item_type: Option<WorkItemType>,
    pub status: Option<WorkItemStatus>,
}

pub struct WorkItemRepository;

impl WorkItemRepository {
    /// Next key number for the (project, item_type) scope: 1 + MAX over
    /// every row ever written in that scope, including soft-deleted ones.
    pub async fn allocate_key_number<'e, E>(
        executor: E,
        project_id: Uuid,
        item_type: WorkItemType,
    ) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: i64 = sqlx::query_scalar(
            r#"
                SELECT COALESCE(MAX(key_number), 0)
                FROM work_items
                WHERE project_id = ? AND item_type = ?
            "#,
        )
        .bind(project_id.to_string())
        .bind(item_type.as_str())
        .fetch_one(executor)
        .await?;

        Ok(max + 1)
    }

    pub async fn create<'e, E>(executor: E, work_item: &WorkItem) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO work_items (
                    id, key, key_number, item_type, project_id, sprint_id,
                    title, description, status, priority, assignee_id, reporter_id,
                    time_spent_minutes, time_estimate_minutes, cycle_time_days,
                    created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(work_item.id.to_string())
        .bind(&work_item.key)
        .bind(work_item.key_number)
        .bind(work_item.item_type.as_str())
        .bind(work_item.project_id.to_string())
        .bind(work_item.sprint_id.map(|id| id.to_string()))
        .bind(&work_item.title)
        .bind(&work_item.description)
        .bind(work_item.status.as_str())
        .bind(work_item.priority.as_str())
        .bind(work_item.assignee_id.map(|id| id.to_string()))
        .bind(work_item.reporter_id.to_string())
        .bind(work_item.time_spent_minutes)
        .bind(work_item.time_estimate_minutes)
        .bind(work_item.cycle_time_days)
        .bind(work_item.created_at.timestamp())
        .bind(work_item.updated_at.timestamp())
        .bind(work_item.deleted_at.map(|dt| dt.timestamp()))
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Direct-by-id fetch deliberately ignores the soft-delete flag so
    /// deleted items stay retrievable (restore flows depend on this).
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<WorkItem>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_WORK_ITEM))
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(|r| decode_work_item(&r)).transpose()
    }

    /// Default list query: `deleted_at IS NULL` applies before any other
    /// filter.
    pub async fn find_with_filter<'e, E>(
        executor: E,
        filter: &WorkItemFilter,
    ) -> DbErrorResult<Vec<WorkItem>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder = sqlx::QueryBuilder::new(SELECT_WORK_ITEM);
        builder.push(" WHERE deleted_at IS NULL");

        if let Some(project_id) = filter.project_id {
            builder.push(" AND project_id = ");
            builder.push_bind(project_id.to_string());
        }
        if let Some(sprint_id) = filter.sprint_id {
            builder.push(" AND sprint_id = ");
            builder.push_bind(sprint_id.to_string());
        }
        if let Some(item_type) = filter.item_type {
            builder.push(" AND item_type = ");
            builder.push_bind(item_type.as_str());
        }
        if let Some(status) = filter.status {
            builder.push(" AND status = ");
            builder.push_bind(status.as_str());
        }
        builder.push(" ORDER BY key_number");

        let rows = builder.build().fetch_all(executor).await?;

        rows.iter().map(decode_work_item).collect()
    }

    /// Update the mutable fields. `key`, `key_number`, `item_type`, and
    /// `project_id` are immutable and never appear in the SET list.
    pub async fn update<'e, E>(executor: E, work_item: &WorkItem) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE work_items
                SET sprint_id = ?, title = ?, description = ?, status = ?,
                    priority = ?, assignee_id = ?, time_spent_minutes = ?,
                    time_estimate_minutes = ?, cycle_time_days = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(work_item.sprint_id.map(|id| id.to_string()))
        .bind(&work_item.title)
        .bind(&work_item.description)
        .bind(work_item.status.as_str())
        .bind(work_item.priority.as_str())
        .bind(work_item.assignee_id.map(|id| id.to_string()))
        .bind(work_item.time_spent_minutes)
        .bind(work_item.time_estimate_minutes)
        .bind(work_item.cycle_time_days)
        .bind(work_item.updated_at.timestamp())
        .bind(work_item.id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Status-only write; nothing else changes besides `updated_at`.
    pub async fn set_status<'e, E>(
        executor: E,
        id: Uuid,
        status: WorkItemStatus,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE work_items SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(updated_at.timestamp())
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Sprint assignment: `Some` adds the item to the sprint, `None` sends
    /// it back to the backlog.
    pub async fn set_sprint<'e, E>(
        executor: E,
        id: Uuid,
        sprint_id: Option<Uuid>,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result =
            sqlx::query("UPDATE work_items SET sprint_id = ?, updated_at = ? WHERE id = ?")
                .bind(sprint_id.map(|id| id.to_string()))
                .bind(updated_at.timestamp())
                .bind(id.to_string())
                .execute(executor)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Soft delete: sets the flag, keeps the row. Returns false when the
    /// item does not exist or is already deleted.
    pub async fn soft_delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE work_items
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

    /// Clears the soft-delete flag; the item reappears in default lists.
    pub async fn restore<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE work_items
                SET deleted_at = NULL, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(now)
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

const SELECT_WORK_ITEM: &str = r#"
    SELECT
        id, key, key_number, item_type, project_id, sprint_id,
        title, description, status, priority, assignee_id, reporter_id,
        time_spent_minutes, time_estimate_minutes, cycle_time_days,
        created_at, updated_at, deleted_at
    FROM work_items
"#;

fn decode_work_item(row: &SqliteRow) -> DbErrorResult<WorkItem> {
    let id: String = row.try_get("id")?;
    let item_type: String = row.try_get("item_type")?;
    let project_id: String = row.try_get("project_id")?;
    let sprint_id: Option<String> = row.try_get("sprint_id")?;
    let status: String = row.try_get("status")?;
    let priority: String = row.try_get("priority")?;
    let assignee_id: Option<String> = row.try_get("assignee_id")?;
    let reporter_id: String = row.try_get("reporter_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;
    let deleted_at: Option<i64> = row.try_get("deleted_at")?;

    Ok(WorkItem {
        id: uuid_field(&id, "work_items.id")?,
        key: row.try_get("key")?,
        key_number: row.try_get("key_number")?,
        item_type: WorkItemType::from_str(&item_type)
            .map_err(|e| DbError::decode(format!("Invalid work_items.item_type: {}", e)))?,
        project_id: uuid_field(&project_id, "work_items.project_id")?,
        sprint_id: opt_uuid_field(sprint_id.as_deref(), "work_items.sprint_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: WorkItemStatus::from_str(&status)
            .map_err(|e| DbError::decode(format!("Invalid work_items.status: {}", e)))?,
        priority: Priority::from_str(&priority)
            .map_err(|e| DbError::decode(format!("Invalid work_items.priority: {}", e)))?,
        assignee_id: opt_uuid_field(assignee_id.as_deref(), "work_items.assignee_id")?,
        reporter_id: uuid_field(&reporter_id, "work_items.reporter_id")?,
        time_spent_minutes: row.try_get("time_spent_minutes")?,
        time_estimate_minutes: row.try_get("time_estimate_minutes")?,
        cycle_time_days: row.try_get("cycle_time_days")?,
        created_at: timestamp_field(created_at, "work_items.created_at")?,
        updated_at: timestamp_field(updated_at, "work_items.updated_at")?,
        deleted_at: opt_timestamp_field(deleted_at, "work_items.deleted_at")?,
    })
}
