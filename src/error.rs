//! Error types for the data-access layer.
//!
//! Every fallible operation returns `Result<T, DbError>`. Errors are
//! surfaced to the immediate caller (no retries, no suppression) with one
//! exception: `Db::authenticate` swallows lookup failures and reports
//! `false` instead, so "wrong password" and "no such user" are
//! indistinguishable to its caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// An operation was attempted while the manager is disconnected,
    /// or `disconnect` was called twice.
    #[error("already disconnected")]
    AlreadyDisconnected,

    /// The store rejected an insert; carries the store's first reported
    /// error message.
    #[error("insert failed: {0}")]
    Insert(String),

    /// No image exists for the given key or public id.
    #[error("image {0} not found")]
    ImageNotFound(String),

    /// No user exists for the given username.
    #[error("user {0} not found")]
    UserNotFound(String),

    /// Transport-level store failure, passed through unmodified.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure while preparing the data directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
