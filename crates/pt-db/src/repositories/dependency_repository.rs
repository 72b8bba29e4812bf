//! Dependency edges between work items.
//!
//! Cycles are forbidden: before inserting `item -> depends_on`, a recursive
//! walk checks whether `item` is already reachable from `depends_on`. Both
//! checks run against the same pool, so a concurrent insert can still slip
//! a cycle in; the walk is a guard, not a proof.

use crate::fields::uuid_field;
use crate::error::Result as DbErrorResult;

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct DependencyRepository {
    pool: SqlitePool,
}

impl DependencyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// True when `target` can already reach `source` through existing
    /// edges, i.e. adding `source -> target` would close a cycle.
    pub async fn would_create_cycle(&self, source: Uuid, target: Uuid) -> DbErrorResult<bool> {
        if source == target {
            return Ok(true);
        }

        let found: i64 = sqlx::query_scalar(
            r#"
                WITH RECURSIVE reach(id) AS (
                    SELECT depends_on_id FROM work_item_dependencies WHERE work_item_id = ?2
                    UNION
                    SELECT d.depends_on_id
                    FROM work_item_dependencies d
                    JOIN reach r ON d.work_item_id = r.id
                )
                SELECT EXISTS(SELECT 1 FROM reach WHERE id = ?1)
            "#,
        )
        .bind(source.to_string())
        .bind(target.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(found != 0)
    }

    /// Duplicate edges surface as `DbError::Duplicate` via the composite
    /// primary key.
    pub async fn add(&self, work_item_id: Uuid, depends_on_id: Uuid) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO work_item_dependencies (work_item_id, depends_on_id, created_at)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(work_item_id.to_string())
        .bind(depends_on_id.to_string())
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn remove(&self, work_item_id: Uuid, depends_on_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query(
            "DELETE FROM work_item_dependencies WHERE work_item_id = ? AND depends_on_id = ?",
        )
        .bind(work_item_id.to_string())
        .bind(depends_on_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_for_item(&self, work_item_id: Uuid) -> DbErrorResult<Vec<Uuid>> {
        let rows = sqlx::query(
            r#"
                SELECT depends_on_id
                FROM work_item_dependencies
                WHERE work_item_id = ?
                ORDER BY created_at
            "#,
        )
        .bind(work_item_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("depends_on_id")?;
                uuid_field(&id, "work_item_dependencies.depends_on_id")
            })
            .collect()
    }
}
