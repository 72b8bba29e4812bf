use crate::fields::{timestamp_field, uuid_field};
use crate::{DbError, error::Result as DbErrorResult};

use pt_core::{MemberRole, User};

use std::str::FromStr;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub async fn create<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO users (id, name, email, role, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            "SELECT id, name, email, role, created_at, updated_at FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(|r| decode_user(&r)).transpose()
    }
}

fn decode_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: uuid_field(&id, "users.id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        role: MemberRole::from_str(&role)
            .map_err(|e| DbError::decode(format!("Invalid users.role: {}", e)))?,
        created_at: timestamp_field(created_at, "users.created_at")?,
        updated_at: timestamp_field(updated_at, "users.updated_at")?,
    })
}
