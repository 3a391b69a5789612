//! Data-access layer.
//!
//! [`Db`] owns the connection to the store and gates every operation on its
//! connected/disconnected state. The actual queries live in the submodules:
//!
//! - `images`: image CRUD and the secondary-index queries
//! - `users`: user creation and username lookup
//!
//! The store is a single SQLite database reached through a one-connection
//! pool, so concurrent operations are serialized by the pool rather than by
//! any locking in this layer. Composite operations (insert + public-id patch
//! + re-read, and the like counter's read-then-write) are therefore not
//! atomic; concurrent likes on the same image can lose updates. That is an
//! accepted trade-off for the traffic this layer serves.

pub mod images;
pub mod users;

use chrono::{SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::Config;
use crate::error::DbError;
use crate::models::{Image, NewImage, NewUser, User};
use crate::services::hash::hash_password;

/// Schema provisioning, run on connect when `Config::setup` is set.
/// Every statement is an existence-checked create, so running it against an
/// already-provisioned database is a no-op.
const SETUP_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS images (
        id TEXT PRIMARY KEY,
        public_id TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL,
        url TEXT NOT NULL,
        tags TEXT NOT NULL DEFAULT '[]',
        likes INTEGER NOT NULL DEFAULT 0,
        liked INTEGER NOT NULL DEFAULT 0,
        user_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_images_created_at ON images (created_at)",
    "CREATE INDEX IF NOT EXISTS idx_images_user_id ON images (user_id)",
    "CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL,
        password TEXT NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    // Not UNIQUE: username uniqueness is enforced by lookup-before-insert in
    // the application, with a known race window.
    "CREATE INDEX IF NOT EXISTS idx_users_username ON users (username)",
];

/// Creation timestamp, stamped store-side. RFC 3339 with microseconds, which
/// sorts lexicographically in chronological order.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Store-reported insert failures (constraint violations and the like)
/// surface as [`DbError::Insert`] carrying the store's message; transport
/// failures pass through unmodified.
pub(crate) fn into_insert_error(err: sqlx::Error) -> DbError {
    match err {
        sqlx::Error::Database(db_err) => DbError::Insert(db_err.message().to_string()),
        other => DbError::Database(other),
    }
}

/// Connection manager and record repository.
///
/// Starts disconnected; [`connect`](Db::connect) opens the database (and
/// provisions it when configured to), [`disconnect`](Db::disconnect) closes
/// it. Every repository method fails with [`DbError::AlreadyDisconnected`]
/// while the manager is disconnected. Connecting again after a disconnect is
/// supported and opens a fresh handle.
pub struct Db {
    config: Config,
    pool: Option<SqlitePool>,
}

impl Db {
    pub fn new(config: Config) -> Self {
        Self { config, pool: None }
    }

    pub fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    fn pool(&self) -> Result<&SqlitePool, DbError> {
        self.pool.as_ref().ok_or(DbError::AlreadyDisconnected)
    }

    /// Opens the connection to the configured database.
    ///
    /// With `Config::setup` set this also creates the database file, both
    /// tables and their secondary indexes if any of them are missing.
    pub async fn connect(&mut self) -> Result<(), DbError> {
        let path = self.config.database_path();
        if self.config.setup {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(self.config.setup);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        if self.config.setup {
            tracing::debug!(db = %self.config.db, "provisioning schema");
            for statement in SETUP_STATEMENTS {
                sqlx::query(statement).execute(&pool).await?;
            }
        }

        tracing::info!(db = %self.config.db, path = %path.display(), "connected");
        self.pool = Some(pool);
        Ok(())
    }

    /// Closes the connection. Fails with [`DbError::AlreadyDisconnected`]
    /// when there is nothing to close.
    pub async fn disconnect(&mut self) -> Result<(), DbError> {
        match self.pool.take() {
            Some(pool) => {
                pool.close().await;
                tracing::info!(db = %self.config.db, "disconnected");
                Ok(())
            }
            None => Err(DbError::AlreadyDisconnected),
        }
    }

    /// Saves a new image: stamps the creation time, derives `tags` from the
    /// description, inserts, then patches the generated key's public id onto
    /// the record and returns it as stored.
    pub async fn save_image(&self, image: NewImage) -> Result<Image, DbError> {
        images::save(self.pool()?, image).await
    }

    /// Marks an image as liked and increments its like counter by one.
    /// Read-then-write: concurrent likes can lose updates.
    pub async fn like_image(&self, public_id: &str) -> Result<Image, DbError> {
        images::like(self.pool()?, public_id).await
    }

    /// Looks up a single image by its public id.
    pub async fn get_image(&self, public_id: &str) -> Result<Image, DbError> {
        images::find_by_public_id(self.pool()?, public_id).await
    }

    /// All images, newest first.
    pub async fn get_images(&self) -> Result<Vec<Image>, DbError> {
        images::list(self.pool()?).await
    }

    /// All images owned by `user_id`, newest first.
    pub async fn get_images_by_user(&self, user_id: &str) -> Result<Vec<Image>, DbError> {
        images::list_by_user(self.pool()?, user_id).await
    }

    /// All images carrying the given tag, newest first. The tag is
    /// normalized before matching; there is no tag index, this scans.
    pub async fn get_images_by_tag(&self, tag: &str) -> Result<Vec<Image>, DbError> {
        images::list_by_tag(self.pool()?, tag).await
    }

    /// Saves a new user, storing the password as its one-way hash.
    pub async fn save_user(&self, user: NewUser) -> Result<User, DbError> {
        users::save(self.pool()?, user).await
    }

    /// Looks up a user by username via the secondary index.
    pub async fn get_user(&self, username: &str) -> Result<User, DbError> {
        users::find_by_username(self.pool()?, username).await
    }

    /// Checks a username/password pair. Lookup failures, including an
    /// unknown username, come back as `false`, never as an error, so the
    /// caller cannot tell a missing user from a wrong password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool, DbError> {
        let pool = self.pool()?;
        match users::find_by_username(pool, username).await {
            Ok(user) => Ok(user.password == hash_password(password)),
            Err(_) => Ok(false),
        }
    }
}
