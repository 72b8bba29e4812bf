//! Team persistence, including the membership list.
//!
//! Membership uniqueness is enforced by the (team_id, user_id) PRIMARY KEY,
//! not by read-then-write logic: a duplicate add surfaces as
//! `DbError::Duplicate` no matter how the race interleaves.

use crate::fields::{opt_timestamp_field, timestamp_field, uuid_field};
use crate::{DbError, error::Result as DbErrorResult};

use pt_core::{MemberRole, Team, TeamMember, TeamStatus};

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn create(&self, team: &Team) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO teams (
                    id, name, description, status, created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(team.id.to_string())
        .bind(&team.name)
        .bind(&team.description)
        .bind(team.status.as_str())
        .bind(team.created_at.timestamp())
        .bind(team.updated_at.timestamp())
        .bind(team.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        for member in &team.members {
            self.insert_member(team.id, member).await?;
        }

        Ok(())
    }

    /// Direct-by-id fetch ignores the soft-delete flag; members come along.
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Team>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_TEAM))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut team = decode_team(&row)?;
        team.members = self.members(id).await?;
        Ok(Some(team))
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Team>> {
        let rows = sqlx::query(&format!(
            "{} WHERE deleted_at IS NULL ORDER BY name",
            SELECT_TEAM
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut teams = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut team = decode_team(row)?;
            team.members = self.members(team.id).await?;
            teams.push(team);
        }
        Ok(teams)
    }

    /// Full-column update; this is the reconciler's first write strategy.
    pub async fn update(&self, team: &Team) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE teams
                SET name = ?, description = ?, status = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&team.name)
        .bind(&team.description)
        .bind(team.status.as_str())
        .bind(team.updated_at.timestamp())
        .bind(team.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fresh read of the persisted status column, used by the reconciler's
    /// verify-after-write step.
    pub async fn read_status(&self, id: Uuid) -> DbErrorResult<Option<String>> {
        let status: Option<String> = sqlx::query_scalar("SELECT status FROM teams WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(status)
    }

    pub async fn soft_delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE teams
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

    pub async fn members(&self, team_id: Uuid) -> DbErrorResult<Vec<TeamMember>> {
        let rows = sqlx::query(
            r#"
                SELECT user_id, role, joined_at
                FROM team_members
                WHERE team_id = ?
                ORDER BY joined_at, user_id
            "#,
        )
        .bind(team_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_member).collect()
    }

    /// Appends a membership entry. A duplicate (team_id, user_id) pair is
    /// rejected by the composite primary key and surfaces as `Duplicate`.
    pub async fn add_member(&self, team_id: Uuid, member: &TeamMember) -> DbErrorResult<()> {
        self.insert_member(team_id, member).await
    }

    /// Removes the matching entry; returns false when it was absent.
    pub async fn remove_member(&self, team_id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM team_members WHERE team_id = ? AND user_id = ?")
            .bind(team_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_member(&self, team_id: Uuid, member: &TeamMember) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO team_members (team_id, user_id, role, joined_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(team_id.to_string())
        .bind(member.user_id.to_string())
        .bind(member.role.as_str())
        .bind(member.joined_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

const SELECT_TEAM: &str = r#"
    SELECT id, name, description, status, created_at, updated_at, deleted_at
    FROM teams
"#;

fn decode_team(row: &SqliteRow) -> DbErrorResult<Team> {
    let id: String = row.try_get("id")?;
    let status: String = row.try_get("status")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;
    let deleted_at: Option<i64> = row.try_get("deleted_at")?;

    Ok(Team {
        id: uuid_field(&id, "teams.id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        status: TeamStatus::from_str(&status)
            .map_err(|e| DbError::decode(format!("Invalid teams.status: {}", e)))?,
        members: Vec::new(),
        created_at: timestamp_field(created_at, "teams.created_at")?,
        updated_at: timestamp_field(updated_at, "teams.updated_at")?,
        deleted_at: opt_timestamp_field(deleted_at, "teams.deleted_at")?,
    })
}

fn decode_member(row: &SqliteRow) -> DbErrorResult<TeamMember> {
    let user_id: String = row.try_get("user_id")?;
    let role: String = row.try_get("role")?;
    let joined_at: i64 = row.try_get("joined_at")?;

    Ok(TeamMember {
        user_id: uuid_field(&user_id, "team_members.user_id")?,
        role: MemberRole::from_str(&role)
            .map_err(|e| DbError::decode(format!("Invalid team_members.role: {}", e)))?,
        joined_at: timestamp_field(joined_at, "team_members.joined_at")?,
    })
}
