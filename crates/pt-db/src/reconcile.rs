//! Team status reconciliation.
//!
//! A status write is never trusted until it is read back. Each strategy
//! writes through a different path, then verifies the stored value; only
//! when every strategy fails to converge does the caller see
//! `DbError::Consistency` carrying what was requested and what the last
//! verify observed.

use crate::error::Result as DbErrorResult;
use crate::repositories::TeamRepository;
use crate::DbError;

use pt_core::{Team, TeamStatus};

use chrono::Utc;
use log::{debug, info, warn};
use sqlx::{Connection, Row};
use uuid::Uuid;

pub struct TeamStatusReconciler<'a> {
    teams: &'a TeamRepository,
}

impl<'a> TeamStatusReconciler<'a> {
    pub fn new(teams: &'a TeamRepository) -> Self {
        Self { teams }
    }

    /// Drives the stored status of `team` to `requested`, escalating through
    /// write strategies until a read-back confirms the value stuck.
    pub async fn set_status(&self, team: &Team, requested: TeamStatus) -> DbErrorResult<Team> {
        let mut last_observed = self.teams.read_status(team.id).await?;

        if last_observed.as_deref() == Some(requested.as_str()) {
            debug!(
                "Team {} status already {}, nothing to reconcile",
                team.id,
                requested.as_str()
            );
            return self.reload(team.id).await;
        }

        info!(
            "Reconciling team {} status: {:?} -> {}",
            team.id,
            last_observed,
            requested.as_str()
        );

        for strategy in 1..=4u8 {
            match strategy {
                1 => self.write_full_update(team, requested).await?,
                2 => self.write_targeted(team.id, requested).await?,
                3 => self.write_replace_row(team.id, requested).await?,
                _ => self.write_dedicated_connection(team.id, requested).await?,
            }

            last_observed = self.teams.read_status(team.id).await?;
            if last_observed.as_deref() == Some(requested.as_str()) {
                if strategy > 1 {
                    warn!(
                        "Team {} status converged on strategy {} of 4",
                        team.id, strategy
                    );
                }
                return self.reload(team.id).await;
            }

            warn!(
                "Team {} status write strategy {} did not stick, observed {:?}",
                team.id, strategy, last_observed
            );
        }

        Err(DbError::consistency(requested.as_str(), last_observed))
    }

    async fn reload(&self, id: Uuid) -> DbErrorResult<Team> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))
    }

    // Strategy 1: the ordinary repository update, all columns.
    async fn write_full_update(&self, team: &Team, requested: TeamStatus) -> DbErrorResult<()> {
        let mut updated = team.clone();
        updated.status = requested;
        updated.updated_at = Utc::now();
        self.teams.update(&updated).await
    }

    // Strategy 2: touch only the status column.
    async fn write_targeted(&self, id: Uuid, requested: TeamStatus) -> DbErrorResult<()> {
        sqlx::query("UPDATE teams SET status = ?, updated_at = ? WHERE id = ?")
            .bind(requested.as_str())
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(self.teams.pool())
            .await?;
        Ok(())
    }

    // Strategy 3: re-read the whole row and replace it wholesale.
    async fn write_replace_row(&self, id: Uuid, requested: TeamStatus) -> DbErrorResult<()> {
        let row = sqlx::query(
            "SELECT id, name, description, created_at, deleted_at FROM teams WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(self.teams.pool())
        .await?;

        let Some(row) = row else {
            return Ok(());
        };

        sqlx::query(
            r#"
                INSERT OR REPLACE INTO teams (
                    id, name, description, status, created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(row.try_get::<String, _>("id")?)
        .bind(row.try_get::<String, _>("name")?)
        .bind(row.try_get::<Option<String>, _>("description")?)
        .bind(requested.as_str())
        .bind(row.try_get::<i64, _>("created_at")?)
        .bind(Utc::now().timestamp())
        .bind(row.try_get::<Option<i64>, _>("deleted_at")?)
        .execute(self.teams.pool())
        .await?;

        Ok(())
    }

    // Strategy 4: bypass the pool's rotation and pin a single connection
    // for the write, so the verify cannot race a pooled sibling.
    async fn write_dedicated_connection(
        &self,
        id: Uuid,
        requested: TeamStatus,
    ) -> DbErrorResult<()> {
        let mut conn = self.teams.pool().acquire().await?;

        sqlx::query("UPDATE teams SET status = ?, updated_at = ? WHERE id = ?")
            .bind(requested.as_str())
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(&mut *conn)
            .await?;

        conn.ping().await?;
        Ok(())
    }
}
