use serde::{Deserialize, Serialize};

/// An image record as stored in the `images` table.
///
/// `public_id` is a reversible base62 encoding of `id`, patched onto the
/// record right after the insert assigns the key. `tags` are derived from
/// `description` when the image is saved and are not kept in sync with
/// later edits. `likes`/`liked` change only through `Db::like_image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Image {
    pub id: String,
    pub public_id: String,
    pub description: String,
    pub url: String,
    #[sqlx(json)]
    pub tags: Vec<String>,
    pub likes: i64,
    pub liked: bool,
    pub user_id: String,
    pub created_at: String,
}

/// Input for `Db::save_image`. Everything else on [`Image`] is derived:
/// the key and public id by the store, `tags` from the description,
/// `likes`/`liked` start at 0/false, `created_at` is stamped on save.
#[derive(Debug, Clone, Deserialize)]
pub struct NewImage {
    pub description: String,
    pub url: String,
    pub user_id: String,
}
