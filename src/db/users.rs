use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::DbError;
use crate::models::{NewUser, User};
use crate::services::hash::hash_password;

const USER_COLUMNS: &str = "id, username, password, name, email, created_at";

pub async fn save(pool: &SqlitePool, user: NewUser) -> Result<User, DbError> {
    let id = Uuid::new_v4();
    let password = hash_password(&user.password);
    let created_at = super::now_timestamp();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password, name, email, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id.to_string())
    .bind(&user.username)
    .bind(&password)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&created_at)
    .execute(pool)
    .await
    .map_err(super::into_insert_error)?;

    tracing::debug!(%id, username = %user.username, "user saved");
    find_by_key(pool, &id).await
}

async fn find_by_key(pool: &SqlitePool, key: &Uuid) -> Result<User, DbError> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(key.to_string())
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DbError::UserNotFound(key.to_string()))
}

/// Username lookup through the secondary index. Both "no match" and a failed
/// lookup collapse into [`DbError::UserNotFound`] carrying the username.
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<User, DbError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = ? LIMIT 1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await;

    match user {
        Ok(Some(user)) => Ok(user),
        Ok(None) | Err(_) => Err(DbError::UserNotFound(username.to_string())),
    }
}
