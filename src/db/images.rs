use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::DbError;
use crate::models::{Image, NewImage};
use crate::services::{public_id, tags};

const IMAGE_COLUMNS: &str =
    "id, public_id, description, url, tags, likes, liked, user_id, created_at";

pub async fn save(pool: &SqlitePool, image: NewImage) -> Result<Image, DbError> {
    let id = Uuid::new_v4();
    let created_at = super::now_timestamp();
    let tags = tags::extract_tags(&image.description);

    sqlx::query(
        r#"
        INSERT INTO images (id, description, url, tags, likes, liked, user_id, created_at)
        VALUES (?, ?, ?, ?, 0, 0, ?, ?)
        "#,
    )
    .bind(id.to_string())
    .bind(&image.description)
    .bind(&image.url)
    .bind(Json(&tags))
    .bind(&image.user_id)
    .bind(&created_at)
    .execute(pool)
    .await
    .map_err(super::into_insert_error)?;

    // The public id depends on the key the store just assigned, so it is
    // patched in a second round trip before the record is read back.
    let public_id = public_id::encode(&id);
    sqlx::query("UPDATE images SET public_id = ? WHERE id = ?")
        .bind(&public_id)
        .bind(id.to_string())
        .execute(pool)
        .await?;

    tracing::debug!(%id, %public_id, "image saved");
    find_by_key(pool, &id).await
}

pub async fn like(pool: &SqlitePool, public_id: &str) -> Result<Image, DbError> {
    let image = find_by_public_id(pool, public_id).await?;

    // Read-then-write, not an atomic increment.
    sqlx::query("UPDATE images SET liked = ?, likes = ? WHERE id = ?")
        .bind(true)
        .bind(image.likes + 1)
        .bind(&image.id)
        .execute(pool)
        .await?;

    find_by_public_id(pool, public_id).await
}

pub async fn find_by_public_id(pool: &SqlitePool, public_id: &str) -> Result<Image, DbError> {
    let key = public_id::decode(public_id)
        .ok_or_else(|| DbError::ImageNotFound(public_id.to_string()))?;
    find_by_key(pool, &key).await
}

async fn find_by_key(pool: &SqlitePool, key: &Uuid) -> Result<Image, DbError> {
    sqlx::query_as::<_, Image>(&format!(
        "SELECT {IMAGE_COLUMNS} FROM images WHERE id = ?"
    ))
    .bind(key.to_string())
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DbError::ImageNotFound(key.to_string()))
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Image>, DbError> {
    let images = sqlx::query_as::<_, Image>(&format!(
        "SELECT {IMAGE_COLUMNS} FROM images ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(images)
}

pub async fn list_by_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<Image>, DbError> {
    let images = sqlx::query_as::<_, Image>(&format!(
        "SELECT {IMAGE_COLUMNS} FROM images WHERE user_id = ? ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}

pub async fn list_by_tag(pool: &SqlitePool, tag: &str) -> Result<Vec<Image>, DbError> {
    let tag = tags::normalize_tag(tag);

    // Tags carry no index; this filters the stored JSON lists row by row.
    let images = sqlx::query_as::<_, Image>(&format!(
        r#"
        SELECT {IMAGE_COLUMNS} FROM images
        WHERE EXISTS (SELECT 1 FROM json_each(images.tags) WHERE json_each.value = ?)
        ORDER BY created_at DESC
        "#
    ))
    .bind(&tag)
    .fetch_all(pool)
    .await?;

    Ok(images)
}
